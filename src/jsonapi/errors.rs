//! # JSON:API Errors

use thiserror::Error;

/// Result type for decoding request documents
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A request body that could not be turned into resource attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Body is not well-formed JSON
    #[error("body is not valid JSON: {0}")]
    InvalidJson(String),

    /// Body is JSON but not a single-resource document of the expected shape
    #[error("body is not a valid resource document: {0}")]
    InvalidStructure(String),

    /// `data.type` names a different resource type
    #[error("expected resource type '{expected}', got '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => DecodeError::InvalidStructure(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                DecodeError::InvalidJson(err.to_string())
            }
        }
    }
}

/// Media type negotiation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiationError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Accept header only allows parameterised JSON:API media types")]
    NotAcceptable,
}
