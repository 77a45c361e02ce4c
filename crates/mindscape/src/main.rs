use clap::{Parser, Subcommand};
use compass::lexicon;
use mindscape::config;
use mindscape::gui::app::{AppInit, AppModel};
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mindscape", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Challenge to map as soon as the window opens (e.g. "stress")
    #[arg(short = 'c', long)]
    challenge: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default config file if there is none and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let lexicon = lexicon::install(config.lexicon());
    log::debug!("Lexicon has {} topics", lexicon.len());

    // clap owns the command line; keep GTK from parsing it again
    let app = RelmApp::new("org.mindscape.compass").with_args(Vec::new());
    app.run::<AppModel>(AppInit {
        config,
        lexicon,
        challenge: cli.challenge,
    });
    Ok(())
}
