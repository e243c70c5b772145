//! Error types for the eresult library.

use crate::models::{Field, QueryVariant};
use thiserror::Error;

/// Main error type for the eresult library.
#[derive(Error, Debug)]
pub enum EResultError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] rquest::Error),

    /// Response could not be converted into the expected type
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Engine was configured incorrectly
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Query parameters were rejected before any request was made
    #[error("Invalid query: {0}")]
    Validation(#[from] ValidationError),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a query description fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("result type must be set before building a query")]
    MissingVariant,

    #[error("{0} results are not available yet")]
    Unsupported(QueryVariant),

    #[error("missing required field `{0}`")]
    MissingRequiredField(Field),

    #[error("unknown {field} '{value}'")]
    UnknownValue { field: Field, value: String },
}

/// Result type alias for eresult operations.
pub type Result<T> = std::result::Result<T, EResultError>;
