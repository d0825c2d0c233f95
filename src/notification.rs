//! Export result notifications.
//!
//! The export pipeline reports every finished download or upload as a single
//! [`Notification`]. How it is shown (snackbar, desktop popup, log line) is up to the
//! [`Notifier`] the caller passes in.

use std::fmt;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Whether the notification should be displayed
    pub is_open: bool,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_open: true,
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_open: true,
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Receives notifications from the export pipeline.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => log::info!("{}", notification.message),
            Severity::Error => log::error!("{}", notification.message),
        }
    }
}
