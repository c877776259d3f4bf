//! Append-only CSV signal store.
//!
//! The store is a flat file with a stable header row
//! (`date,brand,sentiment_score,text,url`). It is the single source of truth
//! for accumulated signals; the clustered table is always written to a
//! separate path so a failed analyze pass can never corrupt it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::signal::Signal;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cluster assignment count {assignments} does not match signal count {signals}")]
    ClusterMismatch { signals: usize, assignments: usize },
}

/// One row of the clustered output table.
#[derive(Serialize)]
struct ClusteredRow<'a> {
    date: DateTime<Utc>,
    brand: &'a str,
    sentiment_score: f64,
    text: &'a str,
    url: &'a str,
    cluster: usize,
}

/// Handle to the flat-file signal store.
///
/// Single-writer, single-process. No deduplication: the same URL ingested in
/// two runs produces two rows, since the upstream feed guarantees no stable
/// unique key across fetches.
#[derive(Debug, Clone)]
pub struct SignalStore {
    path: PathBuf,
}

impl SignalStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a batch of signals, creating the file with a header if absent.
    ///
    /// Existing rows are never rewritten. An empty batch leaves the store
    /// untouched (the file is not created).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be opened or a row cannot
    /// be written; a failed append is fatal for the run.
    pub fn append(&self, signals: &[Signal]) -> Result<(), StoreError> {
        if signals.is_empty() {
            return Ok(());
        }

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        for signal in signals {
            writer.serialize(signal)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read the entire store into memory.
    ///
    /// Returns an empty `Vec` if the store file does not exist yet. Missing
    /// text fields deserialize as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or a row
    /// cannot be parsed.
    pub fn read_all(&self) -> Result<Vec<Signal>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut signals = Vec::new();
        for row in reader.deserialize() {
            signals.push(row?);
        }
        Ok(signals)
    }

    /// Write the clustered copy of the table to `out_path`.
    ///
    /// The output gets a header plus a `cluster` column and is truncated on
    /// every call; the source-of-truth store file is never touched. Cluster
    /// ids are only meaningful within a single analyze run.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ClusterMismatch`] if `assignments` and `signals`
    /// differ in length, or an I/O / CSV error if the write fails.
    pub fn write_clustered(
        &self,
        out_path: &Path,
        signals: &[Signal],
        assignments: &[usize],
    ) -> Result<(), StoreError> {
        if signals.len() != assignments.len() {
            return Err(StoreError::ClusterMismatch {
                signals: signals.len(),
                assignments: assignments.len(),
            });
        }

        let mut writer = csv::Writer::from_path(out_path)?;
        for (signal, &cluster) in signals.iter().zip(assignments) {
            writer.serialize(ClusteredRow {
                date: signal.date,
                brand: &signal.brand,
                sentiment_score: signal.sentiment_score,
                text: &signal.text,
                url: &signal.url,
                cluster,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
