use crate::draw::{Point, Stroke};
use crate::input::events::PointerEvent;
use log::debug;

use super::{CaptureState, SketchSession};

impl SketchSession {
    /// Dispatches a raw pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.on_pointer_press(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Release => self.on_pointer_release(),
        }
    }

    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Starts a new stroke at (x, y) with the tool style in effect right now
    ///   (eraser override applied) and enters `Capturing`
    /// - A press while already capturing starts a fresh stroke; the previous one stops growing
    /// - Missing or non-finite coordinates are ignored
    pub fn on_pointer_press(&mut self, x: Option<f64>, y: Option<f64>) {
        let Some(origin) = Point::from_raw(x, y) else {
            debug!("Ignoring press with malformed coordinates ({x:?}, {y:?})");
            return;
        };

        let (color, width) = self.tools.effective_style(self.background);
        let index = self.sketch.push_stroke(Stroke::new(origin, color, width));
        self.state = CaptureState::Capturing { stroke: index };
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - While capturing: appends the point to the stroke being captured
    /// - While idle, or when the captured stroke was undone: no-op
    pub fn on_pointer_move(&mut self, x: Option<f64>, y: Option<f64>) {
        let CaptureState::Capturing { stroke } = self.state else {
            return;
        };
        let Some(point) = Point::from_raw(x, y) else {
            debug!("Ignoring move with malformed coordinates ({x:?}, {y:?})");
            return;
        };

        if self.sketch.append_point(stroke, point) {
            self.needs_redraw = true;
        }
    }

    /// Processes a primary button release. Ends the gesture without touching the sketch.
    pub fn on_pointer_release(&mut self) {
        self.state = CaptureState::Idle;
    }
}
