//! Error types for EVM adapter setup.

use thiserror::Error;

/// Errors that can occur while building the EVM adapters.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EvmError>;
