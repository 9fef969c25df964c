//! Application telemetry events and sinks.
//!
//! Seatview is a small client, but it still benefits from lightweight
//! telemetry to support debugging and to capture what each submission sent.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Seatview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The review API accepted a submission.
    ReviewSubmitted {
        /// Theater the review belongs to.
        theater_id: String,
        /// Review that was replaced, or `None` for a new review.
        review_id: Option<String>,
        /// Number of uploaded images.
        images: usize,
        /// Number of stored images marked for deletion.
        deleted_images: usize,
    },
    /// The review API rejected a submission or could not be reached.
    ReviewSubmissionFailed {
        /// Theater the review belongs to.
        theater_id: String,
        /// Review that was being replaced, or `None` for a new review.
        review_id: Option<String>,
        /// Display form of the error.
        reason: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
