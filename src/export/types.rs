//! Data types for the export pipeline.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline step an export failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    /// Rendering the sketch or encoding the PNG.
    Rasterize,
    /// Writing the PNG to the local file system.
    Save,
    /// Sending the note to the remote endpoint.
    Transport,
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportStage::Rasterize => f.write_str("rasterize"),
            ExportStage::Save => f.write_str("save"),
            ExportStage::Transport => f.write_str("transport"),
        }
    }
}

/// Errors that can occur while exporting a sketch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create drawing surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),

    #[error("Save task failed: {0}")]
    Task(String),

    #[error("Invalid upload endpoint: {0}")]
    Endpoint(String),

    #[error("Upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upload rejected with HTTP status {0}")]
    Status(u16),
}

impl ExportError {
    pub fn stage(&self) -> ExportStage {
        match self {
            ExportError::Surface(_) | ExportError::Encode(_) => ExportStage::Rasterize,
            ExportError::Save(_) | ExportError::Task(_) => ExportStage::Save,
            ExportError::Endpoint(_) | ExportError::Transport(_) | ExportError::Status(_) => {
                ExportStage::Transport
            }
        }
    }
}

/// Outcome of a download or upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// PNG written to this path.
    Downloaded(PathBuf),
    /// Note accepted by the remote endpoint (any 2xx).
    Uploaded,
    Failed {
        stage: ExportStage,
        message: String,
    },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, ExportOutcome::Failed { .. })
    }
}
