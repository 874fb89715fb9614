//! Error types for sheetsmith

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetsmith
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was rejected (bad path, malformed cell address, bad JSON shape, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A file or sheet does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The document is held open by another process
    #[error("{} is open in another process, please close it and try again", .path.display())]
    ResourceBusy {
        /// Path of the locked document
        path: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by the spreadsheet engine
    #[error("Spreadsheet engine error: {0}")]
    Engine(String),
}

impl Error {
    /// Create an "invalid argument" error with a message
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a "not found" error with a message
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Error::NotFound(msg.into())
    }

    /// Wrap an opaque engine failure
    pub fn engine<E: std::fmt::Display>(err: E) -> Self {
        Error::Engine(err.to_string())
    }

    /// Whether this error means the document is locked by someone else
    pub fn is_resource_busy(&self) -> bool {
        matches!(self, Error::ResourceBusy { .. })
    }
}
