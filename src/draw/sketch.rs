//! Sketch container for the ordered stroke collection.

use super::stroke::{Point, Stroke};

/// All strokes of the current editing session on a fixed-size canvas.
///
/// Strokes are kept in draw order (first = bottom layer, last = top layer).
/// The canvas size is fixed at construction and never re-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    strokes: Vec<Stroke>,
    width: u32,
    height: u32,
}

impl Sketch {
    /// Creates an empty sketch for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            strokes: Vec::new(),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Appends a stroke on top of the existing ones and returns its index.
    pub fn push_stroke(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    /// Appends `point` to the stroke at `index`.
    ///
    /// Only the topmost stroke may grow; any other index (including one that no longer
    /// exists after an undo) is rejected and `false` is returned.
    pub fn append_point(&mut self, index: usize, point: Point) -> bool {
        if index + 1 != self.strokes.len() {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.push_point(point);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the most recently added stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }
}
