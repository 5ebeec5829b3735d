//! Output destinations for log channels.
//!
//! This module provides:
//! - [`SinkId`] — Explicit sink identity, the dedup key for provisioning
//! - [`LogSink`] — A console or file destination with its own threshold

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;
use crate::types::{ColorMode, LogLevel, LogRecord};

/// Identity of a sink within its channel, compared by equality.
///
/// Re-requesting a destination whose identity is already attached must
/// not create a second sink; this key is what makes repeated
/// provisioning calls recognize their earlier work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkId {
    /// The channel's single console sink, tagged with the channel name.
    Console {
        /// Name of the owning channel.
        channel: String,
    },
    /// A file sink, tagged with the path it appends to.
    File(PathBuf),
}

enum SinkWriter {
    Stdout,
    File(Mutex<File>),
}

/// A single output destination with its own severity threshold.
///
/// The threshold is fixed when the sink is created; later provisioning
/// calls adjust verbosity through the channel threshold instead.
pub struct LogSink {
    id: SinkId,
    level: LogLevel,
    color: ColorMode,
    writer: SinkWriter,
}

impl LogSink {
    /// Creates the console sink for `channel`, writing to stdout.
    pub(crate) fn console(channel: &str, level: LogLevel, color: ColorMode) -> Self {
        Self {
            id: SinkId::Console {
                channel: channel.to_string(),
            },
            level,
            color,
            writer: SinkWriter::Stdout,
        }
    }

    /// Opens `path` in append mode and wraps it as a file sink.
    ///
    /// File sinks never colorize their output.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub(crate) fn file(path: &Path, level: LogLevel) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            id: SinkId::File(path.to_path_buf()),
            level,
            color: ColorMode::Plain,
            writer: SinkWriter::File(Mutex::new(file)),
        })
    }

    /// The sink's identity.
    #[must_use]
    pub fn id(&self) -> &SinkId {
        &self.id
    }

    /// The sink's own severity threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The sink's color policy.
    #[must_use]
    pub fn color(&self) -> ColorMode {
        self.color
    }

    /// True if this is the console sink.
    pub(crate) fn is_console(&self) -> bool {
        matches!(self.id, SinkId::Console { .. })
    }

    /// The destination path, for file sinks.
    pub(crate) fn file_path(&self) -> Option<&Path> {
        match &self.id {
            SinkId::File(path) => Some(path),
            SinkId::Console { .. } => None,
        }
    }

    /// Writes one record, dropping it if below the sink threshold.
    ///
    /// A failing sink cannot report through the channel that owns it,
    /// so write failures go to stderr.
    pub(crate) fn write(&self, record: &LogRecord) {
        if !record.level.is_at_least(self.level) {
            return;
        }
        let outcome = match &self.writer {
            SinkWriter::Stdout => {
                let line = match self.color {
                    ColorMode::Colored => record.render_colored(),
                    ColorMode::Plain => record.render(),
                };
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{line}")
            }
            SinkWriter::File(file) => {
                let mut file = file.lock();
                writeln!(file, "{}", record.render()).and_then(|()| file.flush())
            }
        };
        if let Err(err) = outcome {
            eprintln!("labrig-logs: write to {} failed: {err}", self.describe());
        }
    }

    fn describe(&self) -> String {
        match &self.id {
            SinkId::Console { channel } => format!("console sink of '{channel}'"),
            SinkId::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::fs;
    use tempfile::TempDir;

    fn make_record(level: LogLevel, message: &str) -> LogRecord {
        LogRecord {
            timestamp: Local::now(),
            file: file!(),
            line: line!(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn sink_id_equality_is_the_dedup_key() {
        let a = SinkId::Console {
            channel: "rig".to_string(),
        };
        let b = SinkId::Console {
            channel: "rig".to_string(),
        };
        let c = SinkId::Console {
            channel: "other".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);

        let f1 = SinkId::File(PathBuf::from("/tmp/a.log"));
        let f2 = SinkId::File(PathBuf::from("/tmp/a.log"));
        let f3 = SinkId::File(PathBuf::from("/tmp/b.log"));
        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
        assert_ne!(a, f1);
    }

    #[test]
    fn file_sink_appends_plain_lines() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("sink.log");

        let sink = LogSink::file(&path, LogLevel::Debug).expect("open sink");
        sink.write(&make_record(LogLevel::Info, "first"));
        sink.write(&make_record(LogLevel::Info, "second"));

        let contents = fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
        // Never colorized.
        assert!(!contents.contains('\u{1b}'));
    }

    #[test]
    fn file_sink_filters_below_its_threshold() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("sink.log");

        let sink = LogSink::file(&path, LogLevel::Warning).expect("open sink");
        sink.write(&make_record(LogLevel::Info, "dropped"));
        sink.write(&make_record(LogLevel::Error, "kept"));

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("kept"));
    }

    #[test]
    fn file_sink_open_failure_surfaces() {
        let dir = TempDir::new().expect("create temp dir");
        // The directory itself is not an openable file.
        let result = LogSink::file(dir.path(), LogLevel::Info);
        assert!(result.is_err());
    }

    #[test]
    fn console_sink_reports_identity() {
        let sink = LogSink::console("rig", LogLevel::Info, ColorMode::Plain);
        assert!(sink.is_console());
        assert_eq!(sink.file_path(), None);
        assert_eq!(sink.level(), LogLevel::Info);
        assert_eq!(sink.color(), ColorMode::Plain);
    }
}
