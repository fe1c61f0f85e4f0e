//! Upload orchestration
//!
//! [`ArtifactConfig`] owns the configured [`ArtifactHandler`]s and drives a
//! run in three steps:
//!
//! 1. [`ArtifactConfig::resolve_strategies`] picks a transport per destination
//! 2. [`ArtifactConfig::populate_files`] expands each handler's glob pattern
//! 3. [`ArtifactConfig::run`] uploads every file not yet recorded as delivered
//!
//! Handlers and files are processed one at a time, files in sorted order.
//! A failed transfer is logged and recorded, then the loop moves on; only
//! strategy resolution can stop a run before it starts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use artifact_uploader::artifacts::ArtifactConfig;
//!
//! let mut artifacts = ArtifactConfig::new(&config, &TrackingStore::open("."));
//! artifacts.resolve_strategies()?;
//! artifacts.populate_files();
//! let summary = artifacts.run().await;
//! ```

mod handler;

pub use handler::{ArtifactHandler, HandlerError};

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::observability::{Metrics, RunSummary};
use crate::tracking::TrackingStore;
use crate::transfer::{HttpConfig, ResolveError, resolve_strategy};

/// Ordered collection of upload rules
#[derive(Debug)]
pub struct ArtifactConfig {
    handlers: Vec<ArtifactHandler>,
    http: HttpConfig,
}

impl ArtifactConfig {
    pub fn new(config: &Config, tracking: &TrackingStore) -> Self {
        let handlers = config
            .artifacts
            .iter()
            .map(|handler| ArtifactHandler::new(handler, tracking))
            .collect();

        Self {
            handlers,
            http: HttpConfig::from(&config.transfer),
        }
    }

    pub fn handlers(&self) -> &[ArtifactHandler] {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut [ArtifactHandler] {
        &mut self.handlers
    }

    pub fn handler(&self, name: &str) -> Option<&ArtifactHandler> {
        self.handlers.iter().find(|handler| handler.name() == name)
    }

    /// Assign a transfer strategy to every handler from its destination scheme.
    ///
    /// Stops at the first destination that cannot be resolved. Handlers before
    /// it keep their strategy; the caller must not proceed to [`run`](Self::run).
    pub fn resolve_strategies(&mut self) -> Result<(), ResolveError> {
        for handler in &mut self.handlers {
            let strategy = resolve_strategy(handler.destination(), &self.http)?;

            info!(
                handler = %handler.name(),
                destination = %handler.destination(),
                strategy = strategy.name(),
                "Resolved transfer strategy"
            );

            handler.assign_strategy(Arc::new(strategy));
        }

        Ok(())
    }

    /// Expand every handler's pattern. A bad pattern only empties that handler.
    pub fn populate_files(&mut self) {
        for handler in &mut self.handlers {
            match handler.populate_files() {
                Ok(count) => debug!(
                    handler = %handler.name(),
                    pattern = %handler.source_pattern(),
                    count,
                    "Expanded artifact pattern"
                ),
                Err(e) => warn!(
                    handler = %handler.name(),
                    pattern = %handler.source_pattern(),
                    error = %e,
                    "Invalid artifact pattern, handler has no files"
                ),
            }
        }
    }

    /// [`resolve_strategies`](Self::resolve_strategies) then [`populate_files`](Self::populate_files)
    pub fn prepare(&mut self) -> Result<(), ResolveError> {
        self.resolve_strategies()?;
        self.populate_files();
        Ok(())
    }

    /// Upload every resolved file that is not recorded as delivered.
    ///
    /// Each file gets a single attempt. The success record is consulted right
    /// before each attempt, so a delivered file is never sent twice.
    pub async fn run(&mut self) -> RunSummary {
        let metrics = Metrics::new();

        for handler in &mut self.handlers {
            handler.sort_files();
            let handler = &*handler;

            for file in handler.resolved_files() {
                if handler.records().is_succeeded(file) {
                    debug!(handler = %handler.name(), file = %file.display(), "Already uploaded, skipping");
                    metrics.file_skipped();
                    continue;
                }

                match handler.upload_file(file).await {
                    Ok(()) => {
                        info!(handler = %handler.name(), file = %file.display(), "Uploaded artifact");
                        handler.records().record_success(file);
                        metrics.file_uploaded();
                    }
                    Err(e) => {
                        error!(
                            handler = %handler.name(),
                            file = %file.display(),
                            cause = ?e.cause(),
                            error = %e,
                            "Error uploading artifact"
                        );
                        handler.records().record_failure(file);
                        metrics.file_failed();
                    }
                }
            }
        }

        let summary = metrics.snapshot();
        info!(
            uploaded = summary.uploaded,
            skipped = summary.skipped,
            failed = summary.failed,
            "Upload run finished"
        );

        summary
    }
}
