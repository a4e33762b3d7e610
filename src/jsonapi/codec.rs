//! # Resource Codec
//!
//! Pure conversions between resources and JSON:API documents.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::document::{
    CollectionDocument, CollectionMeta, ErrorDocument, ErrorObject, RequestDocument,
    ResourceDocument, ResourceObject,
};
use super::errors::{DecodeError, DecodeResult};

/// A type that can be rendered as a JSON:API resource object
///
/// `Attributes` is the compile-time mapping from the entity's fields to the
/// `attributes` member, both for encoding and for decoding request bodies.
pub trait Resource {
    /// Value of the `type` member
    const TYPE: &'static str;

    type Attributes: Serialize + DeserializeOwned;

    fn id(&self) -> u64;

    fn attributes(&self) -> Self::Attributes;
}

fn resource_object<R: Resource>(resource: &R) -> ResourceObject<R::Attributes> {
    ResourceObject {
        kind: R::TYPE,
        id: resource.id().to_string(),
        attributes: resource.attributes(),
    }
}

/// Wrap a single resource
pub fn encode_one<R: Resource>(resource: &R) -> ResourceDocument<R::Attributes> {
    ResourceDocument {
        data: Some(resource_object(resource)),
    }
}

/// Wrap a collection; `meta.total` is the number of resources encoded
pub fn encode_many<R: Resource>(resources: &[R]) -> CollectionDocument<R::Attributes> {
    let data: Vec<_> = resources.iter().map(resource_object).collect();
    CollectionDocument {
        meta: CollectionMeta { total: data.len() },
        data,
    }
}

/// Parse a single-resource request document into attributes.
///
/// The returned attributes carry no identifier. A `type` member, when
/// present, must name `R::TYPE`; a body `id` is ignored.
pub fn decode<R: Resource>(body: &[u8]) -> DecodeResult<R::Attributes> {
    let document: RequestDocument<R::Attributes> = serde_json::from_slice(body)?;

    if let Some(kind) = document.data.kind {
        if kind != R::TYPE {
            return Err(DecodeError::TypeMismatch {
                expected: R::TYPE,
                found: kind,
            });
        }
    }

    Ok(document.data.attributes)
}

/// Build an error document holding exactly one error object
pub fn encode_error(status: u16, title: &str, detail: &str) -> ErrorDocument {
    ErrorDocument {
        errors: vec![ErrorObject {
            title: title.to_string(),
            status: status.to_string(),
            detail: detail.to_string(),
        }],
    }
}

/// Parse a resource identifier from its string form.
///
/// Only canonical decimal is accepted: ASCII digits, no sign, no
/// whitespace, no leading zero. Zero is never a valid identifier.
pub fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
