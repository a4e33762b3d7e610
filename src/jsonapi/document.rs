//! # JSON:API Documents
//!
//! Wire shapes for resource, collection and error documents.
//!
//! Outbound documents are `Serialize` only; inbound request bodies go
//! through [`RequestDocument`], which accepts just what a create or update
//! needs and ignores any other members.

use serde::{Deserialize, Serialize};

/// One resource inside a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject<A> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Decimal form of the numeric identifier
    pub id: String,
    pub attributes: A,
}

/// `{ "data": ResourceObject | null }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDocument<A> {
    pub data: Option<ResourceObject<A>>,
}

/// `{ "data": [ResourceObject], "meta": { "total": N } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDocument<A> {
    pub data: Vec<ResourceObject<A>>,
    pub meta: CollectionMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionMeta {
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub title: String,
    /// HTTP status code as a decimal string
    pub status: String,
    pub detail: String,
}

/// `{ "errors": [ErrorObject] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

/// Body of a create or update request
#[derive(Debug, Deserialize)]
pub struct RequestDocument<A> {
    pub data: RequestResource<A>,
}

#[derive(Debug, Deserialize)]
pub struct RequestResource<A> {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub attributes: A,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_object_key_order() {
        let doc = ResourceDocument {
            data: Some(ResourceObject {
                kind: "products",
                id: "2".to_string(),
                attributes: json!({"name": "Tempe"}),
            }),
        };

        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            text,
            r#"{"data":{"type":"products","id":"2","attributes":{"name":"Tempe"}}}"#
        );
    }

    #[test]
    fn test_empty_resource_document_is_null_data() {
        let doc: ResourceDocument<()> = ResourceDocument { data: None };
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"data":null}"#);
    }

    #[test]
    fn test_request_document_ignores_extra_members() {
        let body = json!({
            "data": {
                "type": "products",
                "id": 12,
                "attributes": {"name": "Tahu"},
                "relationships": {}
            },
            "meta": {"source": "test"}
        });

        let doc: RequestDocument<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(doc.data.kind.as_deref(), Some("products"));
        assert_eq!(doc.data.attributes["name"], "Tahu");
    }
}
