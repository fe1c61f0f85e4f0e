use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use url::Url;

use super::error::Result;
use super::ftp::{FtpCredentials, FtpUploader};
use super::http::{HttpConfig, HttpUploader};
use super::{HeadersMap, UploadStrategy};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{0} is not supported")]
    UnsupportedScheme(String),

    #[error("{destination} is not a valid destination URL: {source}")]
    InvalidDestination {
        destination: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client for {destination}: {source}")]
    HttpClient {
        destination: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Transport chosen for a destination
#[derive(Debug, Clone)]
pub enum Strategy {
    Http(HttpUploader),
    /// Certificate verification follows `HttpConfig::insecure_tls`
    Https(HttpUploader),
    Ftp(FtpUploader),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Http(_) => "http",
            Strategy::Https(uploader) if uploader.accepts_invalid_certs() => "https-insecure",
            Strategy::Https(_) => "https",
            Strategy::Ftp(_) => "ftp",
        }
    }
}

#[async_trait]
impl UploadStrategy for Strategy {
    async fn upload(&self, destination: &str, headers: &HeadersMap, artifact: &Path) -> Result<()> {
        match self {
            Strategy::Http(uploader) | Strategy::Https(uploader) => {
                uploader.upload(destination, headers, artifact).await
            }
            Strategy::Ftp(uploader) => uploader.upload(destination, headers, artifact).await,
        }
    }
}

/// Pick the transport from the destination's scheme.
///
/// Only `http`, `https` and `ftp` are accepted; `ftps` and anything else is
/// rejected with the destination in the message.
pub fn resolve_strategy(destination: &str, http: &HttpConfig) -> std::result::Result<Strategy, ResolveError> {
    let url = Url::parse(destination).map_err(|source| match source {
        // No scheme at all, so no transport can take it
        url::ParseError::RelativeUrlWithoutBase => {
            ResolveError::UnsupportedScheme(destination.to_string())
        }
        source => ResolveError::InvalidDestination {
            destination: destination.to_string(),
            source,
        },
    })?;

    let http_client_error = |source: reqwest::Error| ResolveError::HttpClient {
        destination: destination.to_string(),
        source,
    };

    match url.scheme() {
        "http" => HttpUploader::new(http, false)
            .map(Strategy::Http)
            .map_err(http_client_error),
        "https" => HttpUploader::new(http, http.insecure_tls)
            .map(Strategy::Https)
            .map_err(http_client_error),
        "ftp" => Ok(Strategy::Ftp(FtpUploader::new(FtpCredentials::from_url(&url)))),
        _ => Err(ResolveError::UnsupportedScheme(destination.to_string())),
    }
}
