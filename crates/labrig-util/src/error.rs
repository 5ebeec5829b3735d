//! Error types for the shared utilities.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the shared utilities.
#[derive(Debug, Error)]
pub enum UtilError {
    /// A named archive does not exist on disk.
    #[error("archive not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bundle could not be encoded into archive bytes.
    #[error("encode error: {0}")]
    Encode(#[source] postcard::Error),

    /// Archive bytes could not be decoded into a bundle.
    #[error("decode error: {0}")]
    Decode(#[source] postcard::Error),
}

/// Result type alias for utility operations.
pub type Result<T> = std::result::Result<T, UtilError>;
