use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transfer::HeadersMap;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Upload rules, processed in declaration order
    #[serde(default)]
    pub artifacts: Vec<HandlerConfig>,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
}

/// One upload rule as written in the configuration file.
///
/// Required fields default to empty strings so that a missing key reaches
/// validation and produces its dedicated message instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandlerConfig {
    #[serde(default)]
    pub name: String,
    /// Glob pattern selecting the local artifacts
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, rename = "http-headers")]
    pub http_headers: HeadersMap,
}

/// Where the per-handler tracking files live
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackingConfig {
    #[serde(default = "default_tracking_dir")]
    pub dir: PathBuf,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            dir: default_tracking_dir(),
        }
    }
}

fn default_tracking_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Transport settings shared by every handler
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Skip certificate verification for https destinations
    #[serde(default = "default_insecure_tls")]
    pub insecure_tls: bool,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            insecure_tls: default_insecure_tls(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_insecure_tls() -> bool {
    true
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("artifact-uploader/{}", env!("CARGO_PKG_VERSION"))
}
