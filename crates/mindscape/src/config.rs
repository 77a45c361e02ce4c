use compass::{Lexicon, Stagger, TopicEntry};
use directories::ProjectDirs;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// `#rrggbb` colour as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(pub Srgb<u8>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(HexColor)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl HexColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub base_delay_ms: u64,
    pub step_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 200,
            step_ms: 120,
        }
    }
}

impl AnimationConfig {
    pub fn stagger(&self) -> Stagger {
        Stagger::new(
            Duration::from_millis(self.base_delay_ms),
            Duration::from_millis(self.step_ms),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub light: HexColor,
    pub dark: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: HexColor::rgb(0x00, 0x7B, 0xFF),
            secondary: HexColor::rgb(0x00, 0xC6, 0xFF),
            accent: HexColor::rgb(0x4A, 0xDE, 0xDE),
            light: HexColor::rgb(0xF7, 0xFA, 0xFC),
            dark: HexColor::rgb(0x4A, 0x55, 0x68),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
}

impl Config {
    /// Builtin topics plus the configured ones. Invalid configured topics are
    /// dropped as a whole so the builtin table always survives.
    pub fn lexicon(&self) -> Lexicon {
        Lexicon::builtin()
            .extended(self.topics.iter().cloned())
            .unwrap_or_else(|e| {
                log::error!("Ignoring configured topics: {}", e);
                Lexicon::builtin()
            })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "mindscape", "mindscape")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("MINDSCAPE").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> Result<std::path::PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_deserialization() {
        let cases = vec![
            ("\"#007BFF\"", HexColor::rgb(0x00, 0x7B, 0xFF)),
            ("\"#007bff\"", HexColor::rgb(0x00, 0x7B, 0xFF)),
            ("\"4ADEDE\"", HexColor::rgb(0x4A, 0xDE, 0xDE)),
            ("\"#fff\"", HexColor::rgb(0xFF, 0xFF, 0xFF)),
        ];

        for (json, expected) in cases {
            let deserialized: HexColor = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_hex_color_rejects_garbage() {
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }

    #[test]
    fn test_hex_color_serializes_as_hex() {
        let json = serde_json::to_string(&HexColor::rgb(0x4A, 0x55, 0x68)).unwrap();
        assert_eq!(json, "\"#4A5568\"");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r##"{
            "animation": { "step_ms": 50 },
            "theme": { "accent": "#112233" },
            "topics": [ { "topic": "Grief", "tools": ["Talk", "Remember"] } ]
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.animation.base_delay_ms, 200);
        assert_eq!(config.animation.step_ms, 50);
        assert_eq!(config.theme.accent, HexColor::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.theme.primary, ThemeConfig::default().primary);
        assert_eq!(config.topics, vec![TopicEntry::new("Grief", &["Talk", "Remember"])]);
    }

    #[test]
    fn test_lexicon_merges_topics() {
        let config = Config {
            topics: vec![TopicEntry::new("Grief", &["Talk"])],
            ..Config::default()
        };
        let lexicon = config.lexicon();
        assert!(lexicon.lookup("grief").is_some());
        assert!(lexicon.lookup("stress").is_some());
    }

    #[test]
    fn test_invalid_topics_fall_back_to_builtin() {
        let config = Config {
            topics: vec![TopicEntry::new("Grief", &[])],
            ..Config::default()
        };
        let lexicon = config.lexicon();
        assert!(lexicon.lookup("grief").is_none());
        assert_eq!(lexicon.len(), Lexicon::builtin().len());
    }

    #[test]
    fn test_stagger_from_animation() {
        let stagger = AnimationConfig::default().stagger();
        assert_eq!(stagger.delay(0), Duration::from_millis(200));
        assert_eq!(stagger.delay(2), Duration::from_millis(440));
    }

    #[test]
    fn test_zero_step_keeps_tools_staggered() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[animation]\nstep_ms = 0\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.animation.step_ms, 0);

        let stagger = config.animation.stagger();
        for i in 0..8 {
            assert!(stagger.delay(i) < stagger.delay(i + 1));
        }
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.topics.len(), 1);
    }
}
