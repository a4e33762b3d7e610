//! # Response Formatting
//!
//! A response is fully serialized before it is handed to axum, so status,
//! headers and body always go out together.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

use crate::jsonapi::MEDIA_TYPE;

use super::errors::{ApiError, ApiResult};

const PLAIN_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    content_type: Option<&'static str>,
    location: Option<String>,
    body: Vec<u8>,
}

impl ApiResponse {
    /// JSON:API document body
    pub fn document<T: Serialize>(status: StatusCode, document: &T) -> ApiResult<Self> {
        Self::serialized(status, MEDIA_TYPE, document)
    }

    /// Plain JSON body, for endpoints outside `/api`
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<Self> {
        Self::serialized(status, PLAIN_JSON, value)
    }

    /// 204 with neither body nor content type
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            content_type: None,
            location: None,
            body: Vec::new(),
        }
    }

    fn serialized<T: Serialize>(
        status: StatusCode,
        content_type: &'static str,
        value: &T,
    ) -> ApiResult<Self> {
        let body = serde_json::to_vec(value)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize response: {}", e)))?;
        Ok(Self {
            status,
            content_type: Some(content_type),
            location: None,
            body,
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = self.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        if let Some(location) = self.location.as_deref() {
            match HeaderValue::from_str(location) {
                Ok(value) => {
                    headers.insert(LOCATION, value);
                }
                Err(err) => warn!(%location, error = %err, "dropping invalid Location header"),
            }
        }

        (self.status, headers, Body::from(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_response() {
        let response = ApiResponse::document(StatusCode::OK, &json!({"data": []})).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.content_type(), Some(MEDIA_TYPE));
        assert_eq!(response.body(), br#"{"data":[]}"#);
    }

    #[test]
    fn test_no_content_has_no_body() {
        let response = ApiResponse::no_content();
        assert!(response.body().is_empty());
        assert_eq!(response.content_type(), None);

        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::NO_CONTENT);
        assert!(http.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_location_header() {
        let http = ApiResponse::document(StatusCode::CREATED, &json!({}))
            .unwrap()
            .with_location("/api/products/3")
            .into_response();
        assert_eq!(http.headers()[LOCATION], "/api/products/3");
        assert_eq!(http.headers()[CONTENT_TYPE], MEDIA_TYPE);
    }

    #[test]
    fn test_invalid_location_is_dropped_but_response_kept() {
        let http = ApiResponse::document(StatusCode::CREATED, &json!({}))
            .unwrap()
            .with_location("/api/products/\n3")
            .into_response();
        assert_eq!(http.status(), StatusCode::CREATED);
        assert!(http.headers().get(LOCATION).is_none());
        assert_eq!(http.headers()[CONTENT_TYPE], MEDIA_TYPE);
    }
}
