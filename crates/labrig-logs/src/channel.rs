//! Named log channels and record emission.
//!
//! This module provides:
//! - [`LogChannel`] — A named stream with a severity threshold and sinks
//! - Emission shorthands that capture the caller's source location

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;

use crate::sink::{LogSink, SinkId};
use crate::types::{LogLevel, LogRecord};

struct ChannelInner {
    name: String,
    level: RwLock<LogLevel>,
    sinks: RwLock<Vec<LogSink>>,
}

/// A named logging stream with a severity threshold and attached sinks.
///
/// Channels are cheap shared handles; clones refer to the same stream.
/// At most one console sink, and at most one file sink per distinct
/// path, is attached at any time — attachment goes through
/// [`LogChannel::attach_if_absent`], which treats a repeated identity
/// as a no-op.
#[derive(Clone)]
pub struct LogChannel {
    inner: Arc<ChannelInner>,
}

impl LogChannel {
    pub(crate) fn new(name: &str, level: LogLevel) -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                name: name.to_string(),
                level: RwLock::new(level),
                sinks: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The channel name; empty for the root channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current severity threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        *self.inner.level.read()
    }

    /// Sets the severity threshold.
    ///
    /// Records below the threshold are dropped silently: not queued,
    /// not forwarded anywhere else.
    pub fn set_level(&self, level: LogLevel) {
        *self.inner.level.write() = level;
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.inner.sinks.read().len()
    }

    /// True if a console sink is attached.
    #[must_use]
    pub fn has_console_sink(&self) -> bool {
        self.inner.sinks.read().iter().any(LogSink::is_console)
    }

    /// Paths of the attached file sinks, in attachment order.
    #[must_use]
    pub fn file_sink_paths(&self) -> Vec<PathBuf> {
        self.inner
            .sinks
            .read()
            .iter()
            .filter_map(|sink| sink.file_path().map(Path::to_path_buf))
            .collect()
    }

    /// Detaches the file sink writing to `path`.
    ///
    /// Returns whether a sink was removed. Sinks are only ever removed
    /// through this call or [`LogChannel::clear_sinks`], never
    /// implicitly.
    pub fn detach_file(&self, path: &Path) -> bool {
        let mut sinks = self.inner.sinks.write();
        let before = sinks.len();
        sinks.retain(|sink| sink.file_path() != Some(path));
        sinks.len() != before
    }

    /// Detaches every sink.
    ///
    /// The channel stays registered and can be re-provisioned.
    pub fn clear_sinks(&self) {
        self.inner.sinks.write().clear();
    }

    /// Attaches `sink` unless one with the same identity is present.
    ///
    /// The check and the insert happen under one write lock, so two
    /// racing provisioning calls cannot both attach.
    pub(crate) fn attach_if_absent(&self, sink: LogSink) {
        let mut sinks = self.inner.sinks.write();
        if sinks.iter().any(|existing| existing.id() == sink.id()) {
            return;
        }
        sinks.push(sink);
    }

    /// True if a sink with identity `id` is attached.
    pub(crate) fn has_sink(&self, id: &SinkId) -> bool {
        self.inner.sinks.read().iter().any(|sink| sink.id() == id)
    }

    #[cfg(test)]
    pub(crate) fn console_color(&self) -> Option<crate::types::ColorMode> {
        self.inner
            .sinks
            .read()
            .iter()
            .find(|sink| sink.is_console())
            .map(LogSink::color)
    }

    /// Emits a record at `level`, tagged with the caller's file and line.
    ///
    /// The record is dropped if below the channel threshold; otherwise
    /// it goes to every sink whose own threshold admits it.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str) {
        if !level.is_at_least(self.level()) {
            return;
        }
        let location = Location::caller();
        let record = LogRecord {
            timestamp: Local::now(),
            file: location.file(),
            line: location.line(),
            level,
            message: message.to_string(),
        };
        for sink in self.inner.sinks.read().iter() {
            sink.write(&record);
        }
    }

    /// Emits at [`LogLevel::Debug`].
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Emits at [`LogLevel::Info`].
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Emits at [`LogLevel::Warning`].
    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Emits at [`LogLevel::Error`].
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Emits at [`LogLevel::Critical`].
    #[track_caller]
    pub fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }
}
