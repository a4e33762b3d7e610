//! # Media Type Negotiation
//!
//! Request-side checks for the JSON:API media type.
//!
//! - The JSON:API media type with any parameter is rejected with 415.
//! - Every other content type, or none, is left to the body decoder.
//! - An `Accept` header that names the JSON:API media type only with
//!   parameters is rejected with 406.

use super::errors::NegotiationError;
use super::MEDIA_TYPE;

/// A parsed `type/subtype; param=value` entry
#[derive(Debug, PartialEq, Eq)]
struct MediaRange<'a> {
    essence: String,
    params: Vec<&'a str>,
}

impl<'a> MediaRange<'a> {
    fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(';');
        let essence = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let params = parts.map(str::trim).filter(|p| !p.is_empty()).collect();
        Self { essence, params }
    }

    fn is_jsonapi(&self) -> bool {
        self.essence == MEDIA_TYPE
    }

    /// Parameters other than the `q` weight
    fn has_media_params(&self) -> bool {
        self.params
            .iter()
            .any(|p| !p.to_ascii_lowercase().starts_with("q="))
    }
}

/// Check the `Content-Type` of a request that carries a document.
///
/// Only a parameterised JSON:API media type is refused here. A body labelled
/// with any other type still goes to the decoder, which rejects non-JSON.
pub fn check_content_type(content_type: Option<&str>) -> Result<(), NegotiationError> {
    let Some(raw) = content_type else {
        return Ok(());
    };

    let range = MediaRange::parse(raw);
    if range.is_jsonapi() && !range.params.is_empty() {
        return Err(NegotiationError::UnsupportedMediaType(raw.trim().to_string()));
    }

    Ok(())
}

/// Check that the client accepts the JSON:API media type
pub fn check_accept(accept: Option<&str>) -> Result<(), NegotiationError> {
    let Some(raw) = accept else {
        return Ok(());
    };

    let jsonapi: Vec<MediaRange<'_>> = raw
        .split(',')
        .map(MediaRange::parse)
        .filter(MediaRange::is_jsonapi)
        .collect();

    if !jsonapi.is_empty() && jsonapi.iter().all(MediaRange::has_media_params) {
        return Err(NegotiationError::NotAcceptable);
    }

    Ok(())
}
