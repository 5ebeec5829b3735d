//! Core types for the logging subsystem.
//!
//! This module provides:
//! - [`LogLevel`] — Severity levels for log channels and sinks
//! - [`ColorMode`] — Console color policy
//! - [`LogRecord`] — A single emission with its source location

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Local};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Log severity levels, ordered from most to least verbose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed diagnostic information
    Debug = 0,
    /// General information
    #[default]
    Info = 1,
    /// Warning conditions
    Warning = 2,
    /// Error conditions
    Error = 3,
    /// Unrecoverable conditions
    Critical = 4,
}

impl LogLevel {
    /// Returns true if this level is at least as severe as the given level.
    #[must_use]
    pub fn is_at_least(&self, level: Self) -> bool {
        *self >= level
    }

    /// Returns the upper-case name used in rendered records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a console sink applies ANSI color to rendered lines.
///
/// File sinks are always plain regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colorize each line by its severity.
    #[default]
    Colored,
    /// Plain text output, e.g. when stdout is redirected to a file.
    Plain,
}

/// A single log emission, captured before formatting.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// When the record was emitted.
    pub timestamp: DateTime<Local>,
    /// Source file that emitted the record.
    pub file: &'static str,
    /// Line number within the source file.
    pub line: u32,
    /// Severity of the emission.
    pub level: LogLevel,
    /// The message text.
    pub message: String,
}

impl LogRecord {
    /// Renders the record as a plain line, without a trailing newline.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS.mmm LEVEL    [file.rs:NN] message`,
    /// with the level left-justified to width 8 and the source path
    /// reduced to its file name.
    #[must_use]
    pub fn render(&self) -> String {
        let file = Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file);
        format!(
            "{} {:<8} [{}:{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level.as_str(),
            file,
            self.line,
            self.message
        )
    }

    /// Renders the record with its severity color applied to the whole line.
    #[must_use]
    pub fn render_colored(&self) -> String {
        let line = self.render();
        match self.level {
            LogLevel::Debug => line.green(),
            LogLevel::Info => line.cyan(),
            LogLevel::Warning => line.yellow().bold(),
            LogLevel::Error => line.red().bold(),
            LogLevel::Critical => line.magenta().bold(),
        }
        .to_string()
    }
}
