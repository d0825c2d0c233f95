//! Image-note upload: metadata, multipart payload, and the HTTP transport.

use super::dependencies::NoteTransport;
use super::file::DEFAULT_FILENAME;
use super::types::ExportError;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::multipart;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Multipart field carrying the PNG.
pub const IMAGE_FIELD: &str = "image_note";

/// Reminder timestamp format, e.g. `2024/3/7 14:05:00`.
pub const REMIND_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Default note service.
pub const DEFAULT_BASE_URL: &str = "https://samnote.mangasocial.online";

/// Note background color: 8-bit RGB plus alpha in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Default for NoteColor {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 1.0,
        }
    }
}

impl NoteColor {
    /// Creates a color, clamping alpha into 0.0-1.0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 1.0 };
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid note color '{0}' (expected R,G,B or R,G,B,A with channels 0-255 and alpha 0-1)"
)]
pub struct NoteColorParseError(String);

impl FromStr for NoteColor {
    type Err = NoteColorParseError;

    /// Parses `R,G,B` or `R,G,B,A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NoteColorParseError(s.to_string());
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(err());
        }

        let channel = |i: usize| parts[i].parse::<u8>().map_err(|_| err());
        let alpha = match parts.get(3) {
            Some(a) => {
                let a: f64 = a.parse().map_err(|_| err())?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(err());
                }
                a
            }
            None => 1.0,
        };

        Ok(NoteColor::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

/// Metadata sent alongside the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteMetadata {
    pub title: String,
    pub background: NoteColor,
    /// Local wall-clock reminder time; `None` means no reminder.
    pub remind_at: Option<NaiveDateTime>,
    pub content: String,
}

/// Formats a reminder as `YYYY/M/D HH:mm:ss`.
pub fn format_remind(at: &NaiveDateTime) -> String {
    at.format(REMIND_FORMAT).to_string()
}

/// A fully assembled note upload, independent of the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSubmission {
    /// PNG bytes for the image part
    pub image: Vec<u8>,
    /// File name of the image part
    pub file_name: String,
    /// Text fields in submission order
    pub fields: Vec<(&'static str, String)>,
}

impl NoteSubmission {
    /// Assembles the payload; `remind` is left out entirely when no reminder is set.
    pub fn new(image: Vec<u8>, metadata: &NoteMetadata) -> Self {
        let color = metadata.background;
        let mut fields = vec![
            ("type", "image".to_string()),
            ("title", metadata.title.clone()),
            ("r", color.r.to_string()),
            ("g", color.g.to_string()),
            ("b", color.b.to_string()),
            ("a", color.a.to_string()),
            ("content", metadata.content.clone()),
        ];
        if let Some(at) = &metadata.remind_at {
            fields.push(("remind", format_remind(at)));
        }

        Self {
            image,
            file_name: DEFAULT_FILENAME.to_string(),
            fields,
        }
    }

    /// Value of a text field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn into_form(self) -> Result<multipart::Form, ExportError> {
        let image = multipart::Part::bytes(self.image)
            .file_name(self.file_name)
            .mime_str("image/png")?;

        let form = self
            .fields
            .into_iter()
            .fold(multipart::Form::new().part(IMAGE_FIELD, image), |form, (name, value)| {
                form.text(name, value)
            });
        Ok(form)
    }
}

/// Remote note service location and request policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEndpoint {
    pub base_url: Url,
    /// Request timeout; `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl UploadEndpoint {
    pub fn parse(base_url: &str, timeout: Option<Duration>) -> Result<Self, ExportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ExportError::Endpoint(format!("'{base_url}': {e}")))?;
        Ok(Self { base_url, timeout })
    }

    /// `<base>/new-note-image/<user_id>`, with the user id as one encoded path segment.
    pub fn note_url(&self, user_id: &str) -> Result<Url, ExportError> {
        if user_id.is_empty() {
            return Err(ExportError::Endpoint("empty user id".to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ExportError::Endpoint(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("new-note-image")
            .push(user_id);
        Ok(url)
    }
}

/// Sends notes as a single multipart POST with `reqwest`.
///
/// Exactly one attempt is made per submission.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: UploadEndpoint,
}

impl HttpTransport {
    pub fn new(endpoint: UploadEndpoint) -> Result<Self, ExportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = endpoint.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl NoteTransport for HttpTransport {
    async fn submit(&self, user_id: &str, submission: NoteSubmission) -> Result<(), ExportError> {
        let url = self.endpoint.note_url(user_id)?;
        let form = submission.into_form()?;

        log::info!("Uploading image note to {url}");
        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        if status.is_success() {
            log::info!("Note service accepted upload ({status})");
            Ok(())
        } else {
            log::warn!("Note service rejected upload ({status})");
            Err(ExportError::Status(status.as_u16()))
        }
    }
}
