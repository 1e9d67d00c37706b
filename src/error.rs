//! Error types for the console report.

use thiserror::Error;

/// Errors that can occur while writing the report.
///
/// Mapping itself is infallible; only the output sink can fail.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The underlying writer rejected a line or the final flush.
    #[error("Report write error: {0}")]
    Write(#[from] std::io::Error),
}
