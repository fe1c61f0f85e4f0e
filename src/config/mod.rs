//! Configuration management for the artifact uploader
//!
//! Settings are layered from:
//! 1. Default values (embedded in structs)
//! 2. A YAML, TOML or JSON configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use artifact_uploader::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("{} upload rules", config.artifacts.len());
//! ```
//!
//! # Environment Variables
//!
//! Scalar settings can be overridden with `ARTIFACT_UPLOADER__<section>__<key>`:
//! - `ARTIFACT_UPLOADER__TRACKING__DIR=/var/lib/uploads`
//! - `ARTIFACT_UPLOADER__TRANSFER__INSECURE_TLS=false`
//!
//! # Configuration File
//!
//! By default the configuration is read from `artifacts.yaml`. This can be
//! overridden with the `ARTIFACT_UPLOADER_CONFIG` environment variable.
//!
//! ```yaml
//! artifacts:
//!   - name: logs
//!     path: ./build/*.log
//!     destination: http://collector.internal/logs
//!     http-headers:
//!       Authorization: "Bearer abc"
//! ```

mod models;
mod sources;
mod validation;

pub use models::{Config, HandlerConfig, TrackingConfig, TransferConfig};
pub use sources::default_path;
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from the default location plus environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file is missing or malformed
    /// - A handler lacks a name, destination or path
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: impl Into<std::path::PathBuf>) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path.into())?;
        validation::validate(&config)?;
        Ok(config)
    }
}
