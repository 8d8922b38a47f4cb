//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-surface options supplied when a board is mounted.
///
/// Every field is optional in TOML and falls back to its default.
/// [`BoardOptions::default`] gives the same values as an empty `[board]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardOptions {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Stroke color - a name, hex notation, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Stroke width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            line_color: default_line_color(),
            line_width: default_line_width(),
        }
    }
}

impl BoardOptions {
    /// Resolved stroke color.
    pub fn stroke_color(&self) -> Color {
        self.line_color.to_color()
    }
}

/// Settings for the PNG export step.
///
/// Passed explicitly to [`crate::export`] functions rather than read from
/// global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Filename template (chrono format specifiers, extension added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    150
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_line_width() -> f64 {
    2.0
}

fn default_output_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Chalkboard")
}

fn default_filename_template() -> String {
    "chalkboard_%Y-%m-%d_%H%M%S".to_string()
}
