//! # REST API Module
//!
//! Handlers for the product endpoints and the error and response types
//! they produce.

pub mod errors;
pub mod handler;
pub mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::{HandlerFn, HandlerRequest, PRODUCTS_PATH};
pub use response::ApiResponse;
