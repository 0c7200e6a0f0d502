//! Reporter trait and error types
//!
//! The walker treats its reporter as a write-only capability: every page
//! transition and every error produces one line, and the full ordered line
//! sequence is the run's artifact.

use thiserror::Error;

/// Errors that can occur while recording report lines
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reporter operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Capability for durably recording walk progress
///
/// Implementations must append lines in call order and make the record
/// durable by the time `finalize` returns. The walker calls `finalize`
/// exactly once at run end, regardless of how the run terminated.
pub trait Reporter {
    /// Records a single line of progress
    fn report(&mut self, line: &str) -> ReportResult<()>;

    /// Flushes and finalizes the record
    fn finalize(&mut self) -> ReportResult<()>;
}
