use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path contains a line break and cannot be tracked: {0:?}")]
    UnrecordablePath(String),
}

pub type Result<T> = std::result::Result<T, TrackingError>;
