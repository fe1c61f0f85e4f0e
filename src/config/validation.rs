use super::models::Config;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("each handler must have a name")]
    MissingName,

    #[error("each handler must have a destination")]
    MissingDestination { handler: String },

    #[error("each handler must have a path")]
    MissingPath { handler: String },

    #[error("handler name '{0}' is used by more than one handler")]
    DuplicateName(String),

    #[error("handler name '{0}' must not contain path separators")]
    InvalidName(String),

    #[error("Transfer timeout must be positive: {field} = 0")]
    ZeroTimeout { field: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_handlers(config)?;
    validate_transfer(config)?;
    Ok(())
}

/// Every handler needs a name, destination and path, and names must be unique
/// because they key the tracking files
fn validate_handlers(config: &Config) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();

    for handler in &config.artifacts {
        if handler.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if handler.destination.trim().is_empty() {
            return Err(ValidationError::MissingDestination {
                handler: handler.name.clone(),
            });
        }
        if handler.path.trim().is_empty() {
            return Err(ValidationError::MissingPath {
                handler: handler.name.clone(),
            });
        }
    }

    for handler in &config.artifacts {
        if handler.name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidName(handler.name.clone()));
        }
        if !seen.insert(handler.name.as_str()) {
            return Err(ValidationError::DuplicateName(handler.name.clone()));
        }
    }

    Ok(())
}

fn validate_transfer(config: &Config) -> Result<(), ValidationError> {
    if config.transfer.connect_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "connect_timeout_secs".to_string(),
        });
    }

    if config.transfer.request_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "request_timeout_secs".to_string(),
        });
    }

    Ok(())
}
