use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to read {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transfer to {destination} failed: {message}")]
    Network { destination: String, message: String },

    #[error("uploading to {destination} returned status {status} {reason}")]
    Remote {
        destination: String,
        status: u16,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TransferError>;

/// Coarse classification used in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferCause {
    Filesystem,
    Network,
    Remote,
}

impl TransferError {
    pub(crate) fn network(destination: &str, message: impl fmt::Display) -> Self {
        TransferError::Network {
            destination: destination.to_string(),
            message: message.to_string(),
        }
    }

    pub fn cause(&self) -> TransferCause {
        match self {
            TransferError::Filesystem { .. } => TransferCause::Filesystem,
            TransferError::Network { .. } => TransferCause::Network,
            TransferError::Remote { .. } => TransferCause::Remote,
        }
    }
}

impl fmt::Display for TransferCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransferCause::Filesystem => "filesystem",
            TransferCause::Network => "network",
            TransferCause::Remote => "remote",
        };
        f.write_str(name)
    }
}
