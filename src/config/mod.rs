//! Configuration file support for chalkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/chalkboard/config.toml`. Settings include the default board
//! options (size, stroke color, stroke width) and where exported images go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{BoardOptions, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted edge length range for configured boards.
pub const EDGE_RANGE: std::ops::RangeInclusive<u32> = 1..=8192;

/// Accepted stroke width range.
pub const LINE_WIDTH_RANGE: std::ops::RangeInclusive<f64> = 0.5..=100.0;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [board]
/// width = 640
/// height = 480
/// line_color = "chalk"
/// line_width = 3.0
///
/// [export]
/// output_dir = "/home/me/Pictures/Chalkboard"
/// filename_template = "sketch_%Y%m%d_%H%M%S"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Default options for newly mounted boards
    #[serde(default)]
    pub board: BoardOptions,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `board.width`, `board.height`: 1 - 8192
    /// - `board.line_width`: 0.5 - 100.0
    /// - `board.line_color`: must parse, otherwise black
    pub fn validate_and_clamp(&mut self) {
        let board = &mut self.board;

        if !EDGE_RANGE.contains(&board.width) {
            warn!("Invalid board width {}, clamping to 1-8192 range", board.width);
            board.width = board.width.clamp(*EDGE_RANGE.start(), *EDGE_RANGE.end());
        }

        if !EDGE_RANGE.contains(&board.height) {
            warn!("Invalid board height {}, clamping to 1-8192 range", board.height);
            board.height = board.height.clamp(*EDGE_RANGE.start(), *EDGE_RANGE.end());
        }

        // NaN fails `contains` and would survive `clamp`.
        if board.line_width.is_nan() {
            warn!("Invalid line_width NaN, using default");
            board.line_width = BoardOptions::default().line_width;
        } else if !LINE_WIDTH_RANGE.contains(&board.line_width) {
            warn!(
                "Invalid line_width {:.1}, clamping to 0.5-100.0 range",
                board.line_width
            );
            board.line_width = board
                .line_width
                .clamp(*LINE_WIDTH_RANGE.start(), *LINE_WIDTH_RANGE.end());
        }

        if board.line_color.parse().is_none() {
            warn!(
                "Invalid line_color {:?}, falling back to black",
                board.line_color
            );
            board.line_color = ColorSpec::Name("black".to_string());
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, using default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/chalkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("chalkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`,
    /// creating the parent directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON Schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.board.width, 300);
        assert_eq!(config.board.height, 150);
        assert_eq!(config.board.line_width, 2.0);
    }

    #[test]
    fn partial_board_table_fills_defaults() {
        let config: Config = toml::from_str("[board]\nline_color = [0, 255, 0]\n").unwrap();
        assert_eq!(config.board.line_color, ColorSpec::Rgb([0, 255, 0]));
        assert_eq!(config.board.width, 300);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let mut config = Config::default();
        config.board.width = 0;
        config.board.height = 100_000;
        config.board.line_width = 500.0;
        config.board.line_color = ColorSpec::from("sparkly");

        config.validate_and_clamp();

        assert_eq!(config.board.width, 1);
        assert_eq!(config.board.height, 8192);
        assert_eq!(config.board.line_width, 100.0);
        assert_eq!(config.board.line_color, ColorSpec::from("black"));
    }

    #[test]
    fn nan_line_width_resets_to_default() {
        let mut config = Config::default();
        config.board.line_width = f64::NAN;
        config.validate_and_clamp();
        assert_eq!(config.board.line_width, 2.0);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[board\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.board.width = 640;
        config.board.line_color = ColorSpec::from("chalk");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.board.width, 640);
        assert_eq!(loaded.board.line_color, ColorSpec::from("chalk"));
    }
}
