//! # REST API Handlers
//!
//! One function per operation. Each takes the store explicitly and a
//! request already matched by the route table, and returns a complete
//! response or an [`ApiError`].

use axum::body::Bytes;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::jsonapi::{self, negotiation};
use crate::model::{Product, ProductAttributes};
use crate::routing::RouteParams;
use crate::store::ProductStore;

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

/// Collection path for products
pub const PRODUCTS_PATH: &str = "/api/products";

/// Signature shared by all handlers
pub type HandlerFn = fn(&dyn ProductStore, &HandlerRequest) -> ApiResult<ApiResponse>;

/// What a handler gets to see of the request
#[derive(Debug, Clone, Default)]
pub struct HandlerRequest {
    pub params: RouteParams,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HandlerRequest {
    fn header(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Serialize)]
struct Greeting {
    message: &'static str,
    status: u16,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /`
pub fn greeting(_store: &dyn ProductStore, _request: &HandlerRequest) -> ApiResult<ApiResponse> {
    ApiResponse::json(
        StatusCode::OK,
        &Greeting {
            message: "Hello World",
            status: StatusCode::OK.as_u16(),
        },
    )
}

/// `GET /health`
pub fn health(_store: &dyn ProductStore, _request: &HandlerRequest) -> ApiResult<ApiResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    ApiResponse::json(StatusCode::OK, &response)
}

/// `GET /api/products`
pub fn list_products(store: &dyn ProductStore, request: &HandlerRequest) -> ApiResult<ApiResponse> {
    accept_jsonapi(request)?;

    let products = store.find_all()?;
    debug!(count = products.len(), "listed products");

    ApiResponse::document(StatusCode::OK, &jsonapi::encode_many(&products))
}

/// `POST /api/products`
pub fn create_product(
    store: &dyn ProductStore,
    request: &HandlerRequest,
) -> ApiResult<ApiResponse> {
    let attributes = decode_body(request)?;

    let product = store.insert(&attributes)?;
    info!(product_id = product.id, "created product");

    Ok(
        ApiResponse::document(StatusCode::CREATED, &jsonapi::encode_one(&product))?
            .with_location(format!("{}/{}", PRODUCTS_PATH, product.id)),
    )
}

/// `GET /api/products/{id}`
pub fn show_product(store: &dyn ProductStore, request: &HandlerRequest) -> ApiResult<ApiResponse> {
    accept_jsonapi(request)?;
    let id = product_id(request)?;

    let product = store
        .find_by_id(id)?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    debug!(product_id = id, "read product");

    ApiResponse::document(StatusCode::OK, &jsonapi::encode_one(&product))
}

/// `PUT /api/products/{id}`
pub fn update_product(
    store: &dyn ProductStore,
    request: &HandlerRequest,
) -> ApiResult<ApiResponse> {
    let attributes = decode_body(request)?;
    let id = product_id(request)?;

    if store.update_by_id(id, &attributes)? == 0 {
        return Err(ApiError::NotFound(id.to_string()));
    }
    info!(product_id = id, "updated product");

    let product = Product::from_attributes(id, attributes);
    ApiResponse::document(StatusCode::OK, &jsonapi::encode_one(&product))
}

/// `DELETE /api/products/{id}`
pub fn delete_product(
    store: &dyn ProductStore,
    request: &HandlerRequest,
) -> ApiResult<ApiResponse> {
    accept_jsonapi(request)?;
    let id = product_id(request)?;

    if store.delete_by_id(id)? == 0 {
        return Err(ApiError::NotFound(id.to_string()));
    }
    info!(product_id = id, "deleted product");

    Ok(ApiResponse::no_content())
}

fn accept_jsonapi(request: &HandlerRequest) -> ApiResult<()> {
    negotiation::check_accept(request.header(ACCEPT)).map_err(|e| {
        warn!(error = %e, "rejected Accept header");
        ApiError::from(e)
    })
}

/// Negotiate, then decode the body as product attributes
fn decode_body(request: &HandlerRequest) -> ApiResult<ProductAttributes> {
    accept_jsonapi(request)?;
    negotiation::check_content_type(request.header(CONTENT_TYPE)).map_err(|e| {
        warn!(error = %e, "rejected Content-Type");
        ApiError::from(e)
    })?;

    jsonapi::decode::<Product>(&request.body).map_err(|e| {
        warn!(error = %e, "invalid request document");
        ApiError::from(e)
    })
}

/// Path id as a stored id. A non-canonical id cannot name a product.
fn product_id(request: &HandlerRequest) -> ApiResult<u64> {
    let raw = request
        .params
        .get("id")
        .ok_or_else(|| ApiError::Internal("route has no 'id' placeholder".to_string()))?;

    jsonapi::parse_id(raw).ok_or_else(|| ApiError::NotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;
    use crate::store::{InMemoryProductStore, StoreError, StoreResult};
    use axum::http::{HeaderValue, Method};
    use serde_json::{json, Value};

    struct FailingStore;

    impl ProductStore for FailingStore {
        fn find_all(&self) -> StoreResult<Vec<Product>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        fn find_by_id(&self, _id: u64) -> StoreResult<Option<Product>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        fn insert(&self, _attributes: &ProductAttributes) -> StoreResult<Product> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        fn update_by_id(&self, _id: u64, _attributes: &ProductAttributes) -> StoreResult<u64> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        fn delete_by_id(&self, _id: u64) -> StoreResult<u64> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn request_for(path: &str, method: Method, body: &str) -> HandlerRequest {
        let mut table = RouteTable::new();
        table.register(method.clone(), "/api/products", ()).unwrap();
        table.register(method.clone(), "/api/products/{id}", ()).unwrap();
        let matched = table.dispatch(&method, path).unwrap();

        HandlerRequest {
            params: matched.params,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    fn body_json(response: &ApiResponse) -> Value {
        serde_json::from_slice(response.body()).unwrap()
    }

    fn seeded() -> InMemoryProductStore {
        InMemoryProductStore::with_products([Product::from_attributes(
            2,
            ProductAttributes::new("Tempe", 1500),
        )])
    }

    #[test]
    fn test_greeting() {
        let response = greeting(&FailingStore, &HandlerRequest::default()).unwrap();
        assert_eq!(response.content_type(), Some("application/json"));
        assert_eq!(response.body(), br#"{"message":"Hello World","status":200}"#);
    }

    #[test]
    fn test_list_empty() {
        let store = InMemoryProductStore::new();
        let response = list_products(&store, &request_for("/api/products", Method::GET, "")).unwrap();
        assert_eq!(body_json(&response), json!({"data": [], "meta": {"total": 0}}));
    }

    #[test]
    fn test_show_existing() {
        let response =
            show_product(&seeded(), &request_for("/api/products/2", Method::GET, "")).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body(),
            br#"{"data":{"type":"products","id":"2","attributes":{"name":"Tempe","price":1500}}}"#
        );
    }

    #[test]
    fn test_show_missing_is_not_found() {
        let err = show_product(&seeded(), &request_for("/api/products/3", Method::GET, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref id) if id == "3"));
    }

    #[test]
    fn test_non_canonical_id_is_not_found() {
        let err = show_product(&seeded(), &request_for("/api/products/002", Method::GET, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref id) if id == "002"));
    }

    #[test]
    fn test_create_sets_location() {
        let store = InMemoryProductStore::new();
        let body = r#"{"data":{"type":"products","attributes":{"name":"Tahu","price":900}}}"#;
        let response =
            create_product(&store, &request_for("/api/products", Method::POST, body)).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.location(), Some("/api/products/1"));
        assert_eq!(body_json(&response)["data"]["id"], "1");
    }

    #[test]
    fn test_create_rejects_parameterised_content_type() {
        let store = InMemoryProductStore::new();
        let mut request = request_for("/api/products", Method::POST, "{}");
        request.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/vnd.api+json; ext=bulk"),
        );

        let err = create_product(&store, &request).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_update_uses_path_id() {
        let store = seeded();
        let body = r#"{"data":{"type":"products","id":"99","attributes":{"name":"Tempe Bacem","price":1800}}}"#;
        let response =
            update_product(&store, &request_for("/api/products/2", Method::PUT, body)).unwrap();

        assert_eq!(body_json(&response)["data"]["id"], "2");
        assert_eq!(
            store.find_by_id(2).unwrap().map(|p| p.name),
            Some("Tempe Bacem".to_string())
        );
        assert_eq!(store.find_by_id(99).unwrap(), None);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let body = r#"{"data":{"attributes":{"name":"x","price":1}}}"#;
        let err = update_product(&seeded(), &request_for("/api/products/5", Method::PUT, body))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_update_invalid_body_is_validation_error() {
        let err = update_product(
            &seeded(),
            &request_for("/api/products/2", Method::PUT, "not json"),
        )
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.title(), "ValidationError");
    }

    #[test]
    fn test_delete() {
        let store = seeded();
        let response =
            delete_product(&store, &request_for("/api/products/2", Method::DELETE, "")).unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(store.is_empty().unwrap());

        let err = delete_product(&store, &request_for("/api/products/2", Method::DELETE, ""))
            .unwrap_err();
        assert_eq!(err.detail(), "Product with id 2 not found");
    }

    #[test]
    fn test_store_failures_are_internal() {
        let list = list_products(&FailingStore, &request_for("/api/products", Method::GET, ""));
        let read = show_product(&FailingStore, &request_for("/api/products/1", Method::GET, ""));
        let delete =
            delete_product(&FailingStore, &request_for("/api/products/1", Method::DELETE, ""));

        for result in [list, read, delete] {
            let err = result.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!err.detail().contains("connection refused"));
        }
    }
}
