//! Capture state machine and sketch session state.

use crate::draw::{Color, Sketch, Stroke, WHITE};
use crate::input::tool::{StrokeWidth, ToolState};
use log::debug;

/// Gesture capture state.
///
/// Only one gesture can be in progress at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No button held - waiting for a press
    Idle,
    /// Button held; moves extend the stroke at this index
    Capturing {
        /// Index of the stroke being captured in the sketch
        stroke: usize,
    },
}

/// Editing session state: the sketch, the tool settings, and the gesture state machine.
///
/// The session exclusively owns its sketch and tools. Pointer handlers live in
/// `mouse.rs`; everything here is tool and undo plumbing.
pub struct SketchSession {
    /// Ordered strokes on the fixed-size canvas
    pub(crate) sketch: Sketch,
    /// Current color, width preset and eraser flag
    pub(crate) tools: ToolState,
    /// Canvas background; eraser strokes paint with it
    pub(crate) background: Color,
    /// Current gesture state
    pub(crate) state: CaptureState,
    /// Whether the drawing surface needs to be redrawn
    pub needs_redraw: bool,
}

impl SketchSession {
    /// Creates a session with an empty sketch on a white canvas and default tools.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_defaults(width, height, WHITE, ToolState::default())
    }

    /// Creates a session with explicit background and starting tool state.
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels, fixed for the session
    /// * `height` - Canvas height in pixels, fixed for the session
    /// * `background` - Canvas background color; alpha is forced to 1.0 so eraser strokes
    ///   cover earlier ink
    /// * `tools` - Initial tool state
    pub fn with_defaults(width: u32, height: u32, background: Color, tools: ToolState) -> Self {
        Self {
            sketch: Sketch::new(width, height),
            tools,
            background: background.opaque(),
            state: CaptureState::Idle,
            needs_redraw: true,
        }
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn capture_state(&self) -> CaptureState {
        self.state
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    /// Removes the most recent stroke, if any.
    ///
    /// Safe mid-gesture: the in-progress stroke is removed and the remaining moves of
    /// that gesture become no-ops until release.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.sketch.undo();
        if removed.is_some() {
            self.needs_redraw = true;
        } else {
            debug!("Undo requested on an empty sketch");
        }
        removed
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
    }

    pub fn set_width(&mut self, width: StrokeWidth) {
        self.tools.set_width(width);
    }

    /// Flips eraser mode for the next stroke; returns the new state.
    pub fn toggle_erase(&mut self) -> bool {
        self.tools.toggle_erase()
    }
}
