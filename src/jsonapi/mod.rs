//! # JSON:API Codec
//!
//! Converts resources to and from JSON:API documents and checks the
//! request media types.

pub mod codec;
pub mod document;
pub mod errors;
pub mod negotiation;

pub use codec::{decode, encode_error, encode_many, encode_one, parse_id, Resource};
pub use document::{
    CollectionDocument, CollectionMeta, ErrorDocument, ErrorObject, ResourceDocument,
    ResourceObject,
};
pub use errors::{DecodeError, DecodeResult, NegotiationError};

/// JSON:API media type, used on every resource and error document
pub const MEDIA_TYPE: &str = "application/vnd.api+json";
