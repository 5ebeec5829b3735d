//! Error types for the logging subsystem.

use thiserror::Error;

/// Errors that can occur while provisioning loggers.
///
/// Emission itself is infallible; only attaching a file sink performs
/// I/O that can fail.
#[derive(Debug, Error)]
pub enum LogError {
    /// A file sink could not be opened or its directory created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The per-user home directory could not be determined.
    #[error("home directory unavailable")]
    HomeDirUnavailable,
}

/// Result type alias for logging operations.
pub type Result<T> = std::result::Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = LogError::HomeDirUnavailable;
        assert_eq!(err.to_string(), "home directory unavailable");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LogError = io_err.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogError>();
    }
}
