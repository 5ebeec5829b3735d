//! Named numeric bundles with binary-archive persistence.
//!
//! This module provides:
//! - [`Bundle`] — A named mapping of traces the pipeline stages share
//! - Archive save/load with optional gzip compression

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// Magic bytes identifying a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A named bundle of numeric traces.
///
/// Keys iterate in sorted order, so two bundles with equal contents
/// produce byte-identical archives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    entries: BTreeMap<String, Vec<f64>>,
}

impl Bundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trace under `name`, returning any previous one.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        self.entries.insert(name.into(), values)
    }

    /// The trace stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// True if a trace is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes and returns the trace under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Vec<f64>> {
        self.entries.remove(name)
    }

    /// Trace names, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates `(name, trace)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of traces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bundle holds no traces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the bundle to a binary archive at `path`.
    ///
    /// With `compress` the archive is gzip-wrapped; [`Bundle::load`]
    /// reads both forms without being told which it is.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be
    /// written.
    pub fn save(&self, path: impl AsRef<Path>, compress: bool) -> Result<()> {
        let bytes = postcard::to_stdvec(self).map_err(UtilError::Encode)?;
        let file = File::create(path)?;
        if compress {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        } else {
            let mut writer = BufWriter::new(file);
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Reads a bundle back from a binary archive.
    ///
    /// Compression is detected from the gzip magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::NotFound`] if `path` does not exist, an I/O
    /// error if it cannot be read, or a decode error if its bytes are
    /// not a bundle archive.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(UtilError::NotFound(path.to_path_buf()));
        }

        let raw = fs::read(path)?;
        let bytes = if raw.starts_with(&GZIP_MAGIC) {
            let mut decoder = GzDecoder::new(raw.as_slice());
            let mut decoded = Vec::new();
            decoder.read_to_end(&mut decoded)?;
            decoded
        } else {
            raw
        };
        postcard::from_bytes(&bytes).map_err(UtilError::Decode)
    }
}

impl FromIterator<(String, Vec<f64>)> for Bundle {
    fn from_iter<T: IntoIterator<Item = (String, Vec<f64>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
