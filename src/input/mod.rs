//! Input handling and tool state machine.
//!
//! This module translates pointer events and tool selections into sketch mutations.
//! It holds the current tool state (color, width preset, eraser) and the gesture
//! state machine (idle, capturing), and can replay recorded input scripts.

pub mod events;
pub mod script;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{CaptureState, SketchSession};
pub use tool::{StrokeWidth, ToolState};
