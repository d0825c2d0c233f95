//! Recorded input scripts.
//!
//! A script is a JSON array of steps replayed into a [`SketchSession`] in order, e.g.
//!
//! ```json
//! [
//!   { "action": "color", "value": "#FF0000" },
//!   { "action": "press", "x": 0, "y": 0 },
//!   { "action": "move", "x": 10, "y": 10 },
//!   { "action": "release" },
//!   { "action": "undo" }
//! ]
//! ```

use crate::draw::{Color, ColorParseError};
use crate::input::{PointerEvent, SketchSession, StrokeWidth};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Press {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    Move {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    Release,
    Undo,
    Color {
        value: String,
    },
    Width {
        value: StrokeWidth,
    },
    ToggleErase,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("step {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },
}

/// Parses a script from JSON text.
pub fn parse(json: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json)
}

/// Replays `steps` into `session` in order.
///
/// Color steps are validated before anything is applied, so a script with a bad color
/// leaves the session untouched.
pub fn replay(session: &mut SketchSession, steps: &[ScriptStep]) -> Result<(), ScriptError> {
    let colors = steps
        .iter()
        .enumerate()
        .map(|(index, step)| match step {
            ScriptStep::Color { value } => Color::parse(value)
                .map(Some)
                .map_err(|source| ScriptError::Color { index, source }),
            _ => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (step, color) in steps.iter().zip(colors) {
        match step {
            ScriptStep::Press { x, y } => session.handle_pointer(PointerEvent::Press { x: *x, y: *y }),
            ScriptStep::Move { x, y } => session.handle_pointer(PointerEvent::Move { x: *x, y: *y }),
            ScriptStep::Release => session.handle_pointer(PointerEvent::Release),
            ScriptStep::Undo => {
                session.undo();
            }
            ScriptStep::Color { .. } => {
                if let Some(color) = color {
                    session.set_color(color);
                }
            }
            ScriptStep::Width { value } => session.set_width(*value),
            ScriptStep::ToggleErase => {
                session.toggle_erase();
            }
        }
    }

    log::debug!(
        "Replayed {} script steps; sketch has {} strokes",
        steps.len(),
        session.sketch().len()
    );
    Ok(())
}
