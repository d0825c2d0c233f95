//! Sketch export for sketchnote.
//!
//! This module turns the current sketch into a PNG and delivers it:
//! - Download to a fixed file name in a local directory
//! - Upload as an image note via a multipart POST
//!
//! Every export reports exactly one notification and never touches the session.

pub mod dependencies;
pub mod file;
pub mod raster;
pub mod types;
pub mod upload;

mod pipeline;

pub use dependencies::{DownloadSaver, ExportDependencies, NoteTransport};
pub use file::DownloadConfig;
pub use pipeline::Exporter;
pub use types::{ExportError, ExportOutcome, ExportStage};
pub use upload::{NoteColor, NoteMetadata, NoteSubmission, UploadEndpoint};
