//! Freehand stroke definition.

use super::color::Color;

/// A position on the drawing surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from raw pointer coordinates.
    ///
    /// Returns `None` when either coordinate is missing or not finite, so malformed
    /// pointer events can be dropped before they reach the stroke model.
    pub fn from_raw(x: Option<f64>, y: Option<f64>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Self { x, y }),
            _ => None,
        }
    }

    pub(crate) fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous freehand gesture.
///
/// Color and width are captured when the gesture starts and never change afterwards;
/// only the point list grows while the gesture is being captured.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub width: f64,
}

impl Stroke {
    /// Starts a stroke at `origin`.
    pub fn new(origin: Point, color: Color, width: f64) -> Self {
        Self {
            points: vec![origin],
            color,
            width,
        }
    }

    /// Points in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// True for a press/release with no movement in between.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}
