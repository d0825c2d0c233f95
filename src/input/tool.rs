//! Tool state: active color, stroke width preset, and eraser flag.

use crate::draw::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default eraser width in pixels.
pub const DEFAULT_ERASER_WIDTH: f64 = 10.0;

/// Stroke width presets offered by the width picker ("1X", "2X", "4X").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrokeWidth {
    /// 2 px
    #[default]
    Thin,
    /// 4 px
    Medium,
    /// 8 px
    Thick,
}

impl StrokeWidth {
    pub fn pixels(self) -> f64 {
        match self {
            StrokeWidth::Thin => 2.0,
            StrokeWidth::Medium => 4.0,
            StrokeWidth::Thick => 8.0,
        }
    }
}

/// Current drawing tool settings.
///
/// Read once when a gesture starts; changing it never touches existing strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    /// Color of the next drawn (non-eraser) stroke
    pub color: Color,
    /// Width preset of the next drawn (non-eraser) stroke
    pub width: StrokeWidth,
    /// Whether the next stroke erases (paints background at the eraser width)
    pub erase: bool,
    /// Width forced on eraser strokes
    pub eraser_width: f64,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: StrokeWidth::Thin,
            erase: false,
            eraser_width: DEFAULT_ERASER_WIDTH,
        }
    }
}

impl ToolState {
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: StrokeWidth) {
        self.width = width;
    }

    /// Flips eraser mode; returns the new state.
    pub fn toggle_erase(&mut self) -> bool {
        self.erase = !self.erase;
        self.erase
    }

    /// Color and width a stroke started now would get.
    ///
    /// In eraser mode the stroke paints with the canvas `background` at the eraser width.
    pub fn effective_style(&self, background: Color) -> (Color, f64) {
        if self.erase {
            (background, self.eraser_width)
        } else {
            (self.color, self.width.pixels())
        }
    }
}
