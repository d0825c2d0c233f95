mod core;
mod mouse;

pub use core::{CaptureState, SketchSession};
