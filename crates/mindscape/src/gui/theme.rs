use crate::config::{HexColor, ThemeConfig};
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgba, WithAlpha};

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub hub: Srgba<f64>,
    pub tool: Srgba<f64>,
    pub tool_active: Srgba<f64>,
    pub line: Srgba<f64>,
    pub line_active: Srgba<f64>,
    pub text: Srgba<f64>,
    pub message: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            background: Self::color(theme.dark, 1.0),
            hub: Self::color(theme.primary, 0.95),
            tool: Self::color(theme.secondary, 0.35),
            tool_active: Self::color(theme.accent, 0.95),
            line: Self::color(theme.light, 0.3),
            line_active: Self::color(theme.accent, 0.9),
            text: Self::color(theme.light, 1.0),
            message: Self::color(theme.light, 0.8),
        }
    }

    fn color(hex: HexColor, alpha: f64) -> Srgba<f64> {
        hex.0.into_format::<f64>().with_alpha(alpha)
    }
}

pub fn load_css(theme: &ThemeConfig) {
    let provider = gtk::CssProvider::new();
    let css_data = format!(
        "
.mindscape-window {{
    background-color: {};
    color: {};
}}
.mindscape-compass {{
    background: none;
}}
",
        theme.dark, theme.light
    );
    provider.load_from_data(&css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
