//! Stroke model and rendering (Cairo-based).
//!
//! This module defines the core drawing types of a sketch:
//! - [`Color`]: RGBA color representation with palette constants and parsing
//! - [`Stroke`]: one freehand gesture with its fixed color and width
//! - [`Sketch`]: ordered stroke collection on a fixed-size canvas
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod sketch;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use render::{render_sketch, render_stroke};
pub use sketch::Sketch;
pub use stroke::{Point, Stroke};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
