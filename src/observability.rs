//! Run counters

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one upload run
#[derive(Debug, Default)]
pub struct Metrics {
    files_uploaded: AtomicU64,
    files_skipped: AtomicU64,
    files_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_uploaded(&self) {
        self.files_uploaded.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "files_uploaded", "Metric incremented");
    }

    pub fn file_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "files_skipped", "Metric incremented");
    }

    pub fn file_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "files_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> RunSummary {
        RunSummary {
            uploaded: self.files_uploaded.load(Ordering::Relaxed),
            skipped: self.files_skipped.load(Ordering::Relaxed),
            failed: self.files_failed.load(Ordering::Relaxed),
        }
    }
}

/// Outcome counts of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub uploaded: u64,
    /// Already delivered by an earlier run
    pub skipped: u64,
    pub failed: u64,
}

impl RunSummary {
    /// Number of transfers actually attempted
    pub fn attempted(&self) -> u64 {
        self.uploaded + self.failed
    }
}
