//! User-facing notifications raised after background work completes.
//!
//! Submissions run after the form has moved on, so their outcome is reported
//! here rather than returned to the caller. The CLI prints notifications to
//! stderr; tests record them.

use std::fmt;
use std::io;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The operation succeeded.
    Success,
    /// Neutral progress information.
    Info,
    /// The operation failed.
    Error,
}

impl NotificationLevel {
    /// Short label used when printing the notification.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "done",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an informational notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {}", self.level.label(), self.message)
    }
}

/// A sink that can deliver notifications.
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}

/// Sink that drops all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotificationSink;

impl NotificationSink for NoopNotificationSink {
    fn notify(&self, _notification: Notification) {}
}

/// Prints notifications to stderr, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotificationSink;

impl NotificationSink for StderrNotificationSink {
    fn notify(&self, notification: Notification) {
        let _ignored = writeln_stderr(&notification.to_string());
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sink that keeps notifications in memory for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingNotificationSink {
    /// Drains recorded notifications.
    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|mut notifications| notifications.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
