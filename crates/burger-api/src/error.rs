//! # API Error Types
//!
//! Error types for REST calls and token storage.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │     Server      │  │       Session           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Http           │  │  Rejected       │  │  Unauthorized           │ │
//! │  │  InvalidUrl     │  │  (success=false │  │  Storage                │ │
//! │  │  Decode         │  │   + message)    │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state slices only ever see `to_string()` of these errors, so every
//! message is written to be shown to a user as-is.

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message the server sends when the access token has expired.
pub const JWT_EXPIRED: &str = "jwt expired";

/// REST client error.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL or endpoint is malformed.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Response body was not the JSON we expected.
    #[error("Unexpected response: {0}")]
    Decode(String),

    // =========================================================================
    // Server Errors
    // =========================================================================
    /// Server answered `success: false`. The message is shown verbatim.
    #[error("{0}")]
    Rejected(String),

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// An authorized endpoint was called with no tokens stored.
    #[error("You are not logged in")]
    Unauthorized,

    /// Tokens could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Returns true if the server said the access token expired.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, ApiError::Rejected(message) if message == JWT_EXPIRED)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}
