//! Mount error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure to attach the app to the host document, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Mount error: {} at {}:{}", message, file, line)]
pub struct MountError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MountError {
    /// Creates a new mount error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
