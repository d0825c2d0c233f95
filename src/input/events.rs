//! Pointer event types fed into the capture state machine.

/// A raw pointer event from the drawing surface.
///
/// Coordinates are optional because the surface may report an event without a
/// resolvable position; such events are ignored by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at (x, y)
    Press { x: Option<f64>, y: Option<f64> },
    /// Pointer moved to (x, y)
    Move { x: Option<f64>, y: Option<f64> },
    /// Primary button released
    Release,
}

impl PointerEvent {
    pub fn press(x: f64, y: f64) -> Self {
        PointerEvent::Press {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            x: Some(x),
            y: Some(y),
        }
    }
}
