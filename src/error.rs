//! Error types for jsonapi-pagination
//!
//! This module defines the fatal error type of the crate. Validation failures
//! caused by client input are NOT represented here; they are returned as
//! [`ErrorDocument`](crate::document::ErrorDocument) values so they can become
//! the body of a 422 response.

use thiserror::Error;

/// The main error type for jsonapi-pagination
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Page Errors
    // ============================================================================
    #[error("Query parameter '{key}' is not an integer: {value:?}")]
    QueryInteger { key: String, value: String },

    #[error("Page number and size must be positive (number: {number}, size: {size})")]
    InvalidPage { number: i128, size: i128 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a query integer error
    pub fn query_integer(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::QueryInteger {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for jsonapi-pagination
pub type Result<T> = std::result::Result<T, Error>;
