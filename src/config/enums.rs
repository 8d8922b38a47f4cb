//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex notation
/// line_color = "white"
/// line_color = "#ff8800"
///
/// # Custom RGB color (0-255 per component)
/// line_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, chalk)
    /// or hex notation (`#rgb`, `#rrggbb`, `#rrggbbaa`)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification, returning `None` for unknown names or bad hex.
    pub fn parse(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`].
    ///
    /// Unknown names default to black with a warning.
    pub fn to_color(&self) -> Color {
        self.parse().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using black", self);
            BLACK
        })
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn rgb_array_converts() {
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color(), RED);
    }

    #[test]
    fn name_and_hex_convert() {
        assert_eq!(ColorSpec::from("white").to_color(), WHITE);
        assert_eq!(ColorSpec::from("#ff0000").to_color(), RED);
    }

    #[test]
    fn unknown_falls_back_to_black() {
        let spec = ColorSpec::from("not-a-color");
        assert!(spec.parse().is_none());
        assert_eq!(spec.to_color(), BLACK);
    }
}
