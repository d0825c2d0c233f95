use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::export::{
    file::{self, DownloadConfig},
    types::ExportError,
    upload::{HttpTransport, NoteSubmission, UploadEndpoint},
};
use crate::notification::{LogNotifier, Notifier};

/// Abstraction over writing a downloaded PNG to local storage.
pub trait DownloadSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over delivering a note to the remote note service.
#[async_trait]
pub trait NoteTransport: Send + Sync {
    async fn submit(&self, user_id: &str, submission: NoteSubmission) -> Result<(), ExportError>;
}

/// Bundle of collaborators used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub saver: Arc<dyn DownloadSaver>,
    pub transport: Arc<dyn NoteTransport>,
    pub notifier: Arc<dyn Notifier>,
}

impl ExportDependencies {
    /// File-system saver, `reqwest` transport for `endpoint`, and log notifications.
    pub fn new(endpoint: UploadEndpoint) -> Result<Self, ExportError> {
        Ok(Self {
            saver: Arc::new(DefaultSaver),
            transport: Arc::new(HttpTransport::new(endpoint)?),
            notifier: Arc::new(LogNotifier),
        })
    }

    /// File-system saver and log notifications, with no note service configured.
    ///
    /// Downloads work as usual; every upload fails at the transport stage without
    /// touching the network.
    pub fn local() -> Self {
        Self {
            saver: Arc::new(DefaultSaver),
            transport: Arc::new(NoTransport),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Replaces the notifier, keeping the other collaborators.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

struct DefaultSaver;

impl DownloadSaver for DefaultSaver {
    fn save(&self, image_data: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError> {
        file::save_download(image_data, config)
    }
}

struct NoTransport;

#[async_trait]
impl NoteTransport for NoTransport {
    async fn submit(&self, _user_id: &str, _submission: NoteSubmission) -> Result<(), ExportError> {
        Err(ExportError::Endpoint("no note service configured".to_string()))
    }
}
