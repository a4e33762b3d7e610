//! # REST API Errors
//!
//! Every failure a request can end in, and how it is rendered as a
//! JSON:API error document.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::jsonapi::{encode_error, DecodeError, NegotiationError};
use crate::routing::RouteError;
use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

const INTERNAL_DETAIL: &str = "The server encountered an unexpected condition";

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not a usable resource document
    #[error("Given request is invalid: {0}")]
    Validation(#[from] DecodeError),

    /// No product with this id
    #[error("Product with id {0} not found")]
    NotFound(String),

    /// No handler is bound to the method and path
    #[error("No route matches {method} {path}")]
    NoRoute { method: String, path: String },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Accept header does not allow an unmodified application/vnd.api+json")]
    NotAcceptable,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store call failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoRoute { .. } => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `title` member of the error object
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::NotFound(_) | ApiError::NoRoute { .. } => "NotFound",
            ApiError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            ApiError::NotAcceptable => "NotAcceptable",
            ApiError::Store(_) | ApiError::Internal(_) => "InternalServerError",
        }
    }

    /// `detail` member of the error object. Server-side causes are replaced
    /// by a fixed text.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Store(_) | ApiError::Internal(_) => INTERNAL_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NoRoute { method, path } => ApiError::NoRoute { method, path },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<NegotiationError> for ApiError {
    fn from(err: NegotiationError) -> Self {
        match err {
            NegotiationError::UnsupportedMediaType(media_type) => {
                ApiError::UnsupportedMediaType(media_type)
            }
            NegotiationError::NotAcceptable => ApiError::NotAcceptable,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let document = encode_error(status.as_u16(), self.title(), &self.detail());
        match ApiResponse::document(status, &document) {
            Ok(response) => response.into_response(),
            Err(_) => status.into_response(),
        }
    }
}
