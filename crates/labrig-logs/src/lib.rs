//! # labrig-logs
//!
//! Idempotent logger provisioning for labrig pipelines.
//!
//! This crate provides:
//!
//! - [`LogLevel`] — Severity levels (Debug, Info, Warning, Error, Critical)
//! - [`LogChannel`] — A named stream with a threshold and attached sinks
//! - [`LogRegistry`] — Name→channel table with exactly-once sink attachment
//! - [`LoggerOptions`] — Provisioning options (level, file, color)
//! - [`get_logger`] / [`log_to_file`] — Free functions on the shared registry
//!
//! Re-provisioning is always safe: any number of calls with the same
//! name and file leave exactly one console sink and at most one file
//! sink attached, so log lines are never duplicated by setup code
//! running twice.
//!
//! ## Example
//!
//! ```rust
//! use labrig_logs::{LogLevel, LogRegistry, LoggerOptions};
//!
//! let registry = LogRegistry::new();
//! let log = registry.get_logger(
//!     "acquisition",
//!     &LoggerOptions::new().with_level(LogLevel::Debug),
//! )?;
//! log.info("session started");
//! # Ok::<(), labrig_logs::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod error;
pub mod registry;
pub mod sink;
pub mod types;

use once_cell::sync::Lazy;

pub use channel::LogChannel;
pub use error::{LogError, Result};
pub use registry::{default_log_dir, LogRegistry, LogTarget, LoggerOptions};
pub use sink::{LogSink, SinkId};
pub use types::{ColorMode, LogLevel, LogRecord};

/// The process-wide registry behind [`get_logger`] and [`log_to_file`].
static DEFAULT_REGISTRY: Lazy<LogRegistry> = Lazy::new(LogRegistry::new);

/// Provisions a channel on the shared process-wide registry.
///
/// See [`LogRegistry::get_logger`].
///
/// # Errors
///
/// Returns an error if a requested file sink cannot be opened.
pub fn get_logger(name: &str, options: &LoggerOptions) -> Result<LogChannel> {
    DEFAULT_REGISTRY.get_logger(name, options)
}

/// Attaches a default file sink on the shared process-wide registry.
///
/// See [`LogRegistry::log_to_file`].
///
/// # Errors
///
/// Returns an error if the home directory is unknown or the log file
/// cannot be created.
pub fn log_to_file<'a>(target: impl Into<LogTarget<'a>>) -> Result<LogChannel> {
    DEFAULT_REGISTRY.log_to_file(target)
}

/// The shared process-wide registry.
#[must_use]
pub fn default_registry() -> &'static LogRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_share_one_registry() {
        let options = LoggerOptions::new().without_color();
        let first = get_logger("shared-registry", &options).expect("provision");
        let second = get_logger("shared-registry", &options).expect("re-provision");

        assert_eq!(first.sink_count(), 1);
        assert_eq!(second.sink_count(), 1);
        assert!(default_registry().channel("shared-registry").is_some());
    }
}
