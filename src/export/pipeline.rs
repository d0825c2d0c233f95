use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::export::{
    dependencies::{DownloadSaver, ExportDependencies},
    file::DownloadConfig,
    raster,
    types::{ExportError, ExportOutcome},
    upload::{NoteMetadata, NoteSubmission},
};
use crate::input::SketchSession;
use crate::notification::Notification;

const DOWNLOAD_FAILED: &str = "Failed to download image";
const UPLOAD_SUCCEEDED: &str = "Save note successfully";
const UPLOAD_FAILED: &str = "Failed to save note";

/// Runs downloads and uploads for a sketch session.
///
/// Every call rasterizes first, then hands the PNG to the file system or the note
/// service, and finally emits exactly one notification. The session is only borrowed,
/// so a failed export leaves sketch and tools exactly as they were.
pub struct Exporter {
    dependencies: ExportDependencies,
    download: DownloadConfig,
}

impl Exporter {
    pub fn new(dependencies: ExportDependencies, download: DownloadConfig) -> Self {
        Self {
            dependencies,
            download,
        }
    }

    /// Saves the rendered sketch as a PNG under the configured download name.
    pub async fn download(&self, session: &SketchSession) -> ExportOutcome {
        log::info!("Starting download of {} strokes", session.sketch().len());

        let image = match raster::rasterize(session.sketch(), session.background()) {
            Ok(image) => image,
            Err(err) => return self.fail(err, DOWNLOAD_FAILED),
        };

        let saver = Arc::clone(&self.dependencies.saver);
        match save_image(saver, image, self.download.clone()).await {
            Ok(path) => {
                self.dependencies.notifier.notify(Notification::success(format!(
                    "Image saved to {}",
                    path.display()
                )));
                ExportOutcome::Downloaded(path)
            }
            Err(err) => self.fail(err, DOWNLOAD_FAILED),
        }
    }

    /// Uploads the rendered sketch with `metadata` as a new image note for `user_id`.
    ///
    /// One attempt only: a failed upload is reported, never retried.
    pub async fn upload(
        &self,
        session: &SketchSession,
        metadata: &NoteMetadata,
        user_id: &str,
    ) -> ExportOutcome {
        log::info!(
            "Starting upload of {} strokes for user {user_id}",
            session.sketch().len()
        );

        let image = match raster::rasterize(session.sketch(), session.background()) {
            Ok(image) => image,
            Err(err) => return self.fail(err, UPLOAD_FAILED),
        };
        let submission = NoteSubmission::new(image, metadata);

        match self.dependencies.transport.submit(user_id, submission).await {
            Ok(()) => {
                self.dependencies
                    .notifier
                    .notify(Notification::success(UPLOAD_SUCCEEDED));
                ExportOutcome::Uploaded
            }
            Err(err) => self.fail(err, UPLOAD_FAILED),
        }
    }

    fn fail(&self, err: ExportError, message: &str) -> ExportOutcome {
        log::error!("{message} ({} stage): {err}", err.stage());
        self.dependencies.notifier.notify(Notification::error(message));
        ExportOutcome::Failed {
            stage: err.stage(),
            message: err.to_string(),
        }
    }
}

async fn save_image(
    saver: Arc<dyn DownloadSaver>,
    image_data: Vec<u8>,
    config: DownloadConfig,
) -> Result<PathBuf, ExportError> {
    task::spawn_blocking(move || saver.save(&image_data, &config))
        .await
        .map_err(|e| ExportError::Task(e.to_string()))?
}
