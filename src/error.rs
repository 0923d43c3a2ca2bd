//! Error types for parsing UI tree dumps.

use std::path::PathBuf;

/// Error type for parse operations.
///
/// Only structural problems are errors. A panel, attribute or sub-element
/// that is simply not present in the dump is represented in the snapshot
/// as an empty collection or `None`, never as a `ParseError`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The dump file could not be read.
    #[error("Failed to read dump file {path}: {source}")]
    Io {
        /// Path of the dump file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The dump is not a well-formed node document.
    #[error("Malformed dump: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
