//! Configuration enum types.

use crate::draw::{Color, ColorParseError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// background = "#FFF8E1"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow, orange, pink, purple) or
    /// `#RGB`, `#RRGGBB`, `#RRGGBBAA` hex
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// RGB arrays are converted from 0-255 to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Name(name) => Color::parse(name),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgba8(*r, *g, *b, 255)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}
