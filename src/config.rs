//! Configuration and color scheme management for termfolio.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termfolio/config.toml`
//! - Built-in color schemes (default, solarized, monokai, nord, dracula)
//! - The RGB color type shared with the renderer
//!
//! # Configuration File
//!
//! The configuration file is located at `~/.termfolio/config.toml`:
//!
//! ```toml
//! # Identity shown in the prompt and header
//! username = "radin"
//! hostname = "portfolio"
//!
//! # Color scheme: default, solarized-dark, monokai, nord, dracula
//! color_scheme = "default"
//!
//! [card]
//! visible = true
//!
//! [status_bar]
//! visible = true
//! show_time = true
//! ```
//!
//! A missing file falls back to defaults; a malformed file is logged and
//! ignored. Command-line flags override whatever the file says.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration loading failures. Always recoverable: the caller falls
/// back to defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Username shown in the prompt
    pub username: String,
    /// Hostname shown in the prompt
    pub hostname: String,
    /// Color scheme name
    pub color_scheme: String,
    /// ID card panel settings
    pub card: CardConfig,
    /// Status bar settings
    pub status_bar: StatusBarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "radin".to_string(),
            hostname: "portfolio".to_string(),
            color_scheme: "default".to_string(),
            card: CardConfig::default(),
            status_bar: StatusBarConfig::default(),
        }
    }
}

/// ID card panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub visible: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Status bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    pub visible: bool,
    pub show_time: bool,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            visible: true,
            show_time: true,
        }
    }
}

impl Config {
    /// Load configuration from `~/.termfolio/config.toml`, falling back
    /// to defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Get config file path
    fn config_path() -> Option<PathBuf> {
        Some(crate::app_dir()?.join("config.toml"))
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,

    // Header bar colors
    pub header_bg: Color,
    pub header_fg: Color,
    pub header_accent: Color,

    // Transcript colors, by line kind
    pub command_fg: Color,
    pub output_fg: Color,
    pub welcome_fg: Color,
    pub error_fg: Color,

    // Available-commands banner
    pub banner_fg: Color,

    // Input line
    pub prompt_fg: Color,
    pub input_fg: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,

    // ID card panel
    pub card_border: Color,
    pub card_fg: Color,
    pub card_accent: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

impl ColorScheme {
    /// Default scheme: the green-on-black phosphor look of the original
    /// portfolio page.
    pub fn default_scheme() -> Self {
        Self {
            name: "default".to_string(),

            header_bg: Color::new(30, 30, 30),
            header_fg: Color::new(160, 160, 160),
            header_accent: Color::new(74, 222, 128),

            command_fg: Color::new(74, 222, 128),
            output_fg: Color::new(209, 213, 219),
            welcome_fg: Color::new(96, 165, 250),
            error_fg: Color::new(248, 113, 113),

            banner_fg: Color::new(52, 160, 90),

            prompt_fg: Color::new(96, 165, 250),
            input_fg: Color::new(74, 222, 128),

            status_bar_bg: Color::new(30, 30, 30),
            status_bar_fg: Color::new(120, 120, 120),

            card_border: Color::new(74, 222, 128),
            card_fg: Color::new(209, 213, 219),
            card_accent: Color::new(74, 222, 128),
        }
    }

    /// Solarized Dark scheme
    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),

            header_bg: Color::new(7, 54, 66),
            header_fg: Color::new(147, 161, 161),
            header_accent: Color::new(38, 139, 210),

            command_fg: Color::new(133, 153, 0),
            output_fg: Color::new(147, 161, 161),
            welcome_fg: Color::new(38, 139, 210),
            error_fg: Color::new(220, 50, 47),

            banner_fg: Color::new(88, 110, 117),

            prompt_fg: Color::new(38, 139, 210),
            input_fg: Color::new(133, 153, 0),

            status_bar_bg: Color::new(7, 54, 66),
            status_bar_fg: Color::new(101, 123, 131),

            card_border: Color::new(38, 139, 210),
            card_fg: Color::new(147, 161, 161),
            card_accent: Color::new(181, 137, 0),
        }
    }

    /// Monokai scheme
    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),

            header_bg: Color::new(39, 40, 34),
            header_fg: Color::new(248, 248, 242),
            header_accent: Color::new(166, 226, 46),

            command_fg: Color::new(166, 226, 46),
            output_fg: Color::new(248, 248, 242),
            welcome_fg: Color::new(102, 217, 239),
            error_fg: Color::new(249, 38, 114),

            banner_fg: Color::new(117, 113, 94),

            prompt_fg: Color::new(102, 217, 239),
            input_fg: Color::new(166, 226, 46),

            status_bar_bg: Color::new(60, 60, 54),
            status_bar_fg: Color::new(150, 150, 140),

            card_border: Color::new(166, 226, 46),
            card_fg: Color::new(248, 248, 242),
            card_accent: Color::new(253, 151, 31),
        }
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),

            header_bg: Color::new(46, 52, 64),
            header_fg: Color::new(216, 222, 233),
            header_accent: Color::new(136, 192, 208),

            command_fg: Color::new(163, 190, 140),
            output_fg: Color::new(216, 222, 233),
            welcome_fg: Color::new(136, 192, 208),
            error_fg: Color::new(191, 97, 106),

            banner_fg: Color::new(97, 110, 136),

            prompt_fg: Color::new(136, 192, 208),
            input_fg: Color::new(163, 190, 140),

            status_bar_bg: Color::new(59, 66, 82),
            status_bar_fg: Color::new(147, 161, 181),

            card_border: Color::new(136, 192, 208),
            card_fg: Color::new(216, 222, 233),
            card_accent: Color::new(235, 203, 139),
        }
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),

            header_bg: Color::new(40, 42, 54),
            header_fg: Color::new(248, 248, 242),
            header_accent: Color::new(189, 147, 249),

            command_fg: Color::new(80, 250, 123),
            output_fg: Color::new(248, 248, 242),
            welcome_fg: Color::new(139, 233, 253),
            error_fg: Color::new(255, 85, 85),

            banner_fg: Color::new(98, 114, 164),

            prompt_fg: Color::new(139, 233, 253),
            input_fg: Color::new(80, 250, 123),

            status_bar_bg: Color::new(68, 71, 90),
            status_bar_fg: Color::new(98, 114, 164),

            card_border: Color::new(189, 147, 249),
            card_fg: Color::new(248, 248, 242),
            card_accent: Color::new(255, 121, 198),
        }
    }

    /// Get scheme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "solarized-dark" | "solarized_dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_scheme(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "solarized-dark", "monokai", "nord", "dracula"]
    }
}
