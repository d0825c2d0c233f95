//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::file::DEFAULT_FILENAME;
use crate::export::upload::DEFAULT_BASE_URL;
use crate::input::StrokeWidth;
use crate::input::tool::DEFAULT_ERASER_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// The canvas size is fixed for a session; exported images have exactly this size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color; eraser strokes paint with it
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool state a new session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a color string (name or hex) or an RGB array like
    /// `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default width preset (thin, medium, thick)
    #[serde(default)]
    pub default_width: StrokeWidth,

    /// Eraser stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: StrokeWidth::default(),
            eraser_width: default_eraser_width(),
        }
    }
}

/// Download destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DownloadSection {
    /// Directory for downloaded images; `~` is expanded. Defaults to the user's
    /// download directory.
    #[serde(default)]
    pub directory: Option<String>,

    /// File name of downloaded images; an existing file is replaced
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for DownloadSection {
    fn default() -> Self {
        Self {
            directory: None,
            filename: default_filename(),
        }
    }
}

/// Note service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UploadConfig {
    /// Base URL of the note service; notes are posted to `<base_url>/new-note-image/<user>`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset waits for the server indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

pub(super) fn default_canvas_width() -> u32 {
    800
}

pub(super) fn default_canvas_height() -> u32 {
    500
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::from("white")
}

pub(super) fn default_color() -> ColorSpec {
    ColorSpec::from("black")
}

pub(super) fn default_eraser_width() -> f64 {
    DEFAULT_ERASER_WIDTH
}

pub(super) fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
