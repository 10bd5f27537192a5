//! Errors raised while loading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse rules config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules config: {0}")]
    Invalid(String),
}
