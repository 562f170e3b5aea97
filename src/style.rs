//! Text decoration for terminal output.
//!
//! Whether escape codes are emitted is decided once, when a [`Styler`] is
//! built, and carried as a plain flag afterwards. Rendering never consults
//! process state.

use crate::error::StdioError;
use clap::ValueEnum;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "1";

/// When to emit color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the color library decide (NO_COLOR, CLICOLOR, CLICOLOR_FORCE, tty)
    #[default]
    Auto,
    /// Always emit escape codes
    Always,
    /// Never emit escape codes
    Never,
}

impl ColorMode {
    /// Resolve the mode to a concrete capability flag
    pub fn resolve(self) -> bool {
        match self {
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = StdioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(StdioError::InvalidColorMode(s.to_string())),
        }
    }
}

/// Applies named styles to text, or passes it through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape codes
    pub const fn plain() -> Self {
        Self::new(false)
    }

    pub fn from_mode(mode: ColorMode) -> Self {
        Self::new(mode.resolve())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    /// Gray is bright black, same as the color library's `bright_black`
    pub fn gray(&self, text: &str) -> String {
        self.paint(text, Color::BrightBlack)
    }

    pub fn bold(&self, text: &str) -> String {
        self.wrap(text, BOLD)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        self.wrap(text, &color.to_fg_str())
    }

    fn wrap(&self, text: &str, code: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", code, text, RESET)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::from_mode(ColorMode::Auto)
    }
}
