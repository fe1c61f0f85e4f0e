//! HTTP client for posting artifacts

use async_trait::async_trait;
use reqwest::Client;
use std::error::Error as StdError;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::error::{Result, TransferError};
use super::{HeadersMap, UploadStrategy, read_artifact};
use crate::config::TransferConfig;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Skip certificate verification for https destinations
    pub insecure_tls: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from(&TransferConfig::default())
    }
}

impl From<&TransferConfig> for HttpConfig {
    fn from(config: &TransferConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            user_agent: config.user_agent.clone(),
            insecure_tls: config.insecure_tls,
        }
    }
}

/// POSTs the raw artifact bytes to the destination URL
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: Client,
    accept_invalid_certs: bool,
}

impl HttpUploader {
    pub fn new(config: &HttpConfig, accept_invalid_certs: bool) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            accept_invalid_certs,
        })
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

#[async_trait]
impl UploadStrategy for HttpUploader {
    async fn upload(&self, destination: &str, headers: &HeadersMap, artifact: &Path) -> Result<()> {
        let body = read_artifact(artifact).await?;
        let size = body.len();

        debug!(destination, artifact = %artifact.display(), size, "Posting artifact");

        let mut request = self.client.post(destination).body(body);

        // Headers go out exactly as configured
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransferError::network(destination, "request timed out")
            } else if e.is_builder() {
                TransferError::network(destination, format!("invalid request: {}", error_chain(&e)))
            } else {
                TransferError::network(destination, error_chain(&e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Remote {
                destination: destination.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        debug!(destination, size, status = status.as_u16(), "Artifact accepted");

        Ok(())
    }
}

/// reqwest hides the interesting part (refused, DNS, TLS) in the source chain
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
