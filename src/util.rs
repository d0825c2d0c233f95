//! Utility functions for color names and stroke smoothing geometry.
//!
//! This module provides:
//! - Color name lookup used by the config file and [`Color::parse`]
//! - Cardinal spline control points for smoothed freehand strokes

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "yellow", "orange", "pink", "purple"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "purple" => Some(PURPLE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Stroke Smoothing
// ============================================================================

/// Tension used for freehand strokes (0.0 = straight segments).
pub const STROKE_TENSION: f64 = 0.5;

/// Computes the two Bezier control points around `current` for a cardinal spline.
///
/// The first control point sits on the incoming side of `current`, the second on the
/// outgoing side. Both lie on the line parallel to `previous -> next`, scaled by the
/// relative lengths of the adjacent segments so short segments get short handles.
///
/// # Returns
/// `(incoming, outgoing)`. When all three points coincide both handles equal `current`.
pub fn spline_control_points(
    previous: Point,
    current: Point,
    next: Point,
    tension: f64,
) -> (Point, Point) {
    let d01 = previous.distance_to(current);
    let d12 = current.distance_to(next);
    let total = d01 + d12;

    if total <= f64::EPSILON {
        return (current, current);
    }

    let fa = tension * d01 / total;
    let fb = tension * d12 / total;
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;

    (
        Point::new(current.x - fa * dx, current.y - fa * dy),
        Point::new(current.x + fb * dx, current.y + fb * dy),
    )
}

/// Elevates a quadratic Bezier segment `start -> control -> end` to cubic control points.
pub fn quadratic_to_cubic(start: Point, control: Point, end: Point) -> (Point, Point) {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    (
        Point::new(
            start.x + TWO_THIRDS * (control.x - start.x),
            start.y + TWO_THIRDS * (control.y - start.y),
        ),
        Point::new(
            end.x + TWO_THIRDS * (control.x - end.x),
            end.y + TWO_THIRDS * (control.y - end.y),
        ),
    )
}
