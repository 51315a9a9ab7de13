//! Message styling
//!
//! Styles are applied as ANSI SGR sequences built from `colored` colors. A
//! [`Styler`] with styling disabled returns every token unchanged, so the same
//! rendering code produces plain or colorized output.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::env;

/// Named styles used by the line and stack trace renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Debug,
    Info,
    Warning,
    Error,
    Failure,
    Strong,
}

impl Style {
    fn color(&self) -> Option<Color> {
        match self {
            Style::Debug => Some(Color::Cyan),
            Style::Info => Some(Color::Blue),
            Style::Warning => Some(Color::Yellow),
            Style::Error | Style::Failure => Some(Color::Red),
            Style::Strong => None,
        }
    }

    /// SGR parameter list, e.g. `1;36`
    fn sgr_params(&self) -> String {
        match self.color() {
            Some(color) => format!("1;{}", color.to_fg_str()),
            None => "1".to_string(),
        }
    }
}

/// Style and label pair a log level renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub style: Style,
    pub label: &'static str,
}

impl LevelStyle {
    pub const fn new(style: Style, label: &'static str) -> Self {
        Self { style, label }
    }
}

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when the output is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Lenient parse used by the configuration loader
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "always" | "true" | "force" => ColorMode::Always,
            "never" | "false" | "none" => ColorMode::Never,
            "auto" | "tty" => ColorMode::Auto,
            other => {
                eprintln!(
                    "[LOGGER WARNING] Invalid color mode '{}', falling back to 'auto'",
                    other
                );
                ColorMode::Auto
            }
        }
    }
}

/// Applies [`Style`]s to text tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape sequences
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Resolve a color mode against the output stream it will be used for
    pub fn for_mode(mode: ColorMode, output_is_terminal: bool) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => output_is_terminal && env::var_os("NO_COLOR").is_none(),
        };
        Self::new(enabled)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", style.sgr_params(), text)
        } else {
            text.to_string()
        }
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(Style::Failure, text)
    }

    pub fn strong(&self, text: &str) -> String {
        self.paint(Style::Strong, text)
    }

    /// Render a level label with the style the level maps to
    pub fn level(&self, level_style: LevelStyle) -> String {
        self.paint(level_style.style, level_style.label)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::plain()
    }
}
