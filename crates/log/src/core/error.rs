//! Error handling for tasklog

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
///
/// Emission never returns an error: suppressed messages are not failures and
/// write errors are reported through `tracing` instead.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The backing file could not be opened (initial open or reopen)
    #[error("failed to open log file '{}': {source}", .path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The sink reported an error while closing
    #[error("failed to close log sink: {0}")]
    Close(#[source] io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl LogError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
