use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::HandlerConfig;
use crate::tracking::{HandlerRecords, TrackingStore};
use crate::transfer::{HeadersMap, TransferCause, TransferError, UploadStrategy};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("strategy not resolved for handler {0}")]
    StrategyNotResolved(String),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl HandlerError {
    pub fn cause(&self) -> Option<TransferCause> {
        match self {
            HandlerError::StrategyNotResolved(_) => None,
            HandlerError::Transfer(e) => Some(e.cause()),
        }
    }
}

/// One named upload rule: which files go where, and how
pub struct ArtifactHandler {
    name: String,
    source_pattern: String,
    destination: String,
    headers: HeadersMap,
    resolved_files: Vec<PathBuf>,
    strategy: Option<Arc<dyn UploadStrategy>>,
    records: HandlerRecords,
}

impl ArtifactHandler {
    pub fn new(config: &HandlerConfig, tracking: &TrackingStore) -> Self {
        Self {
            name: config.name.clone(),
            source_pattern: config.path.clone(),
            destination: config.destination.clone(),
            headers: config.http_headers.clone(),
            resolved_files: Vec::new(),
            strategy: None,
            records: tracking.scoped(config.name.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_pattern(&self) -> &str {
        &self.source_pattern
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn headers(&self) -> &HeadersMap {
        &self.headers
    }

    /// Files found by the last [`populate_files`](Self::populate_files)
    pub fn resolved_files(&self) -> &[PathBuf] {
        &self.resolved_files
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn assign_strategy(&mut self, strategy: Arc<dyn UploadStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn records(&self) -> &HandlerRecords {
        &self.records
    }

    /// Replace the resolved files with the current matches of the pattern.
    ///
    /// On a pattern error the list is left empty. Directories and entries
    /// that cannot be read are skipped.
    pub fn populate_files(&mut self) -> Result<usize, glob::PatternError> {
        self.resolved_files.clear();

        for entry in glob::glob(&self.source_pattern)? {
            match entry {
                Ok(path) if path.is_dir() => {
                    debug!(handler = %self.name, path = %path.display(), "Skipping directory match");
                }
                Ok(path) => self.resolved_files.push(path),
                Err(e) => {
                    debug!(handler = %self.name, error = %e, "Skipping unreadable glob entry");
                }
            }
        }

        Ok(self.resolved_files.len())
    }

    /// Byte-wise ascending order so every run walks files the same way
    pub(crate) fn sort_files(&mut self) {
        self.resolved_files
            .sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    }

    /// Send one file through the assigned strategy
    pub async fn upload_file(&self, file: &Path) -> Result<(), HandlerError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or_else(|| HandlerError::StrategyNotResolved(self.name.clone()))?;

        strategy
            .upload(&self.destination, &self.headers, file)
            .await?;

        Ok(())
    }
}

impl fmt::Debug for ArtifactHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactHandler")
            .field("name", &self.name)
            .field("source_pattern", &self.source_pattern)
            .field("destination", &self.destination)
            .field("headers", &self.headers)
            .field("resolved_files", &self.resolved_files)
            .field("has_strategy", &self.strategy.is_some())
            .finish()
    }
}
