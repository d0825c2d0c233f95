//! Library exports for the sketchnote engine.
//!
//! Exposes the stroke model, the capture state machine, the renderer and the export
//! pipeline so the command-line front end and other hosts share the same behavior.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notification;
pub mod util;

pub use config::Config;
