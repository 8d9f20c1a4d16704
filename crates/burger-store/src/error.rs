//! # Store Error Types
//!
//! Errors that escape the state layer. Slice failures never do: they end
//! up as strings in each slice's `error` field. What is left is setup
//! (config, storage) and the orchestration helpers that refuse to start
//! a request.

use thiserror::Error;

use burger_api::ApiError;
use burger_core::{CoreError, ValidationError};

/// Result type alias for state-layer setup and orchestration.
pub type StoreResult<T> = Result<T, StoreError>;

/// State-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A form did not pass client-side validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A domain rule was broken (e.g. ordering without a bun).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// API client construction or token storage failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No platform directory could be determined for app data.
    #[error("No data directory available on this platform")]
    NoDataDir,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}
