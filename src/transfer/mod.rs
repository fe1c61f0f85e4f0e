//! Transfer strategies: how one local artifact reaches one destination
//!
//! ## Key Components
//!
//! - [`UploadStrategy`] - capability implemented by every transport
//! - [`HttpUploader`] - POST of the raw file bytes, optionally skipping TLS verification
//! - [`FtpUploader`] - `STOR` of the file under its base name
//! - [`Strategy`] - the variant picked for a destination by [`resolve_strategy`]

mod dispatch;
mod error;
mod ftp;
mod http;

pub use dispatch::{ResolveError, Strategy, resolve_strategy};
pub use error::{Result, TransferCause, TransferError};
pub use ftp::{FtpCredentials, FtpUploader, remote_file_name};
pub use http::{HttpConfig, HttpUploader};

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::path::Path;

pub type HeadersMap = BTreeMap<String, String>;

/// Sends a single local file to a destination.
///
/// Implementations read the whole artifact before touching the network, so a
/// missing file never produces a connection attempt.
#[async_trait]
pub trait UploadStrategy: Send + Sync {
    async fn upload(&self, destination: &str, headers: &HeadersMap, artifact: &Path) -> Result<()>;
}

/// Read the full artifact into memory
pub(crate) async fn read_artifact(artifact: &Path) -> Result<Bytes> {
    tokio::fs::read(artifact)
        .await
        .map(Bytes::from)
        .map_err(|source| TransferError::Filesystem {
            path: artifact.to_path_buf(),
            source,
        })
}
