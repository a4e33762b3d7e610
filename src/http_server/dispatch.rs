//! Request Dispatch
//!
//! Bridges axum to the route table: every request lands in
//! [`dispatch_request`], which picks the handler and runs it against the
//! store on the blocking pool.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use crate::rest_api::handler::{
    create_product, delete_product, greeting, health, list_products, show_product, update_product,
};
use crate::rest_api::{ApiError, HandlerFn, HandlerRequest};
use crate::routing::{RouteResult, RouteTable};
use crate::store::ProductStore;

/// State shared by all requests
pub struct AppState {
    pub routes: RouteTable<HandlerFn>,
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> RouteResult<Self> {
        Ok(Self {
            routes: service_routes()?,
            store,
        })
    }
}

/// All bindings served by this crate
pub fn service_routes() -> RouteResult<RouteTable<HandlerFn>> {
    let mut routes: RouteTable<HandlerFn> = RouteTable::new();

    routes.register(Method::GET, "/", greeting)?;
    routes.register(Method::GET, "/health", health)?;
    routes.register(Method::GET, "/api/products", list_products)?;
    routes.register(Method::POST, "/api/products", create_product)?;
    routes.register(Method::GET, "/api/products/{id}", show_product)?;
    routes.register(Method::PUT, "/api/products/{id}", update_product)?;
    routes.register(Method::DELETE, "/api/products/{id}", delete_product)?;

    Ok(routes)
}

/// Fallback handler that owns all routing
pub async fn dispatch_request(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let matched = match state.routes.dispatch(&method, uri.path()) {
        Ok(matched) => matched,
        Err(err) => {
            debug!(%method, path = uri.path(), "no route");
            return ApiError::from(err).into_response();
        }
    };

    let handler = *matched.handler();
    let request = HandlerRequest {
        params: matched.params,
        headers,
        body,
    };
    let store = Arc::clone(&state.store);

    match tokio::task::spawn_blocking(move || handler(store.as_ref(), &request)).await {
        Ok(Ok(response)) => response.into_response(),
        Ok(Err(err)) => err.into_response(),
        Err(join_err) => {
            error!(error = %join_err, "handler task failed");
            ApiError::Internal(join_err.to_string()).into_response()
        }
    }
}
