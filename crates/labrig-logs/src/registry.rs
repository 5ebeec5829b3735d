//! Idempotent provisioning of named log channels.
//!
//! This module provides:
//! - [`LogRegistry`] — Mutex-guarded name→channel table
//! - [`LoggerOptions`] — Provisioning options (level, file, color)
//! - [`LogTarget`] — Name-or-channel argument for file-only provisioning

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::channel::LogChannel;
use crate::error::{LogError, Result};
use crate::sink::{LogSink, SinkId};
use crate::types::{ColorMode, LogLevel};

/// Directory under the user's home that holds default log files.
const LOG_DIR_NAME: &str = ".labrig_logs";

/// Options for [`LogRegistry::get_logger`].
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    level: LogLevel,
    file: Option<PathBuf>,
    color: ColorMode,
}

impl LoggerOptions {
    /// Creates options with defaults: `Info`, console only, colored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the severity threshold the channel is (re)opened at.
    ///
    /// The threshold is re-applied to the channel on every provisioning
    /// call — the last caller wins, so a channel can be re-opened to
    /// raise or lower verbosity. Already-attached sinks keep the
    /// threshold they were created with.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Requests a file sink at `path` in addition to the console sink.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Disables ANSI color on the console sink.
    ///
    /// Useful when stdout is redirected to a file. Only consulted when
    /// the console sink is first created; an existing sink keeps its
    /// color policy.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = ColorMode::Plain;
        self
    }
}

/// Target of [`LogRegistry::log_to_file`]: a channel name or an
/// already-provisioned channel.
pub enum LogTarget<'a> {
    /// Provision (or reuse) the channel with this name.
    Name(&'a str),
    /// Attach to this channel directly.
    Channel(LogChannel),
}

impl<'a> From<&'a str> for LogTarget<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<LogChannel> for LogTarget<'_> {
    fn from(channel: LogChannel) -> Self {
        Self::Channel(channel)
    }
}

impl From<&LogChannel> for LogTarget<'_> {
    fn from(channel: &LogChannel) -> Self {
        Self::Channel(channel.clone())
    }
}

/// Process-wide table of named channels with idempotent provisioning.
///
/// The registry is an explicit object so a host can construct and
/// inject its own; the shared default lives behind
/// [`crate::get_logger`] and [`crate::log_to_file`]. Lookup-or-create
/// runs under one mutex, so concurrent callers cannot race a channel
/// into existence twice.
#[derive(Default)]
pub struct LogRegistry {
    channels: Mutex<HashMap<String, LogChannel>>,
}

impl LogRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up or creates the channel for `name` and applies `options`.
    ///
    /// An empty `name` addresses the root channel. The channel
    /// threshold is set to the requested level on every call. A
    /// requested file sink is attached only if no sink for that exact
    /// path exists; the console sink is created once per channel and
    /// left untouched afterwards. Calling this any number of times with
    /// the same name and file leaves exactly one console sink and at
    /// most one file sink attached.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested file sink cannot be opened.
    pub fn get_logger(&self, name: &str, options: &LoggerOptions) -> Result<LogChannel> {
        let channel = self.lookup_or_create(name, options.level);
        channel.set_level(options.level);

        if let Some(path) = &options.file {
            attach_file_sink(&channel, path, options.level)?;
        }

        channel.attach_if_absent(LogSink::console(name, options.level, options.color));
        Ok(channel)
    }

    /// Attaches a file sink under the per-user log directory.
    ///
    /// The file lands at `<home>/.labrig_logs/<channel-name>`, with
    /// intermediate directories created on demand. Attaching a path the
    /// channel already writes to is a success, not an error. No console
    /// sink is created.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::HomeDirUnavailable`] if no home directory is
    /// known, or an I/O error if the directory or file cannot be
    /// created.
    pub fn log_to_file<'a>(&self, target: impl Into<LogTarget<'a>>) -> Result<LogChannel> {
        let dir = default_log_dir()?;
        self.log_to_file_in(&dir, target)
    }

    fn log_to_file_in<'a>(
        &self,
        dir: &Path,
        target: impl Into<LogTarget<'a>>,
    ) -> Result<LogChannel> {
        let channel = match target.into() {
            LogTarget::Name(name) => self.lookup_or_create(name, LogLevel::default()),
            LogTarget::Channel(channel) => channel,
        };
        fs::create_dir_all(dir)?;
        let path = dir.join(channel.name());
        attach_file_sink(&channel, &path, channel.level())?;
        Ok(channel)
    }

    /// Returns the channel for `name`, if it has been provisioned.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<LogChannel> {
        self.channels.lock().get(name).cloned()
    }

    /// Number of provisioned channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.lock().len()
    }

    fn lookup_or_create(&self, name: &str, level: LogLevel) -> LogChannel {
        let mut channels = self.channels.lock();
        channels
            .entry(name.to_string())
            .or_insert_with(|| LogChannel::new(name, level))
            .clone()
    }
}

/// The per-user directory that holds default log files.
///
/// # Errors
///
/// Returns [`LogError::HomeDirUnavailable`] if no home directory is
/// known for the current user.
pub fn default_log_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .ok_or(LogError::HomeDirUnavailable)
}

/// Opens `path` and attaches it as a file sink unless one is present.
fn attach_file_sink(channel: &LogChannel, path: &Path, level: LogLevel) -> Result<()> {
    let id = SinkId::File(path.to_path_buf());
    if channel.has_sink(&id) {
        return Ok(());
    }
    channel.attach_if_absent(LogSink::file(path, level)?);
    Ok(())
}
