//! # HTTP Server Module
//!
//! Serves the product API over axum.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /health` - Health check
//! - `/api/products` - List and create
//! - `/api/products/{id}` - Read, update and delete

pub mod config;
pub mod dispatch;
pub mod server;

pub use config::HttpServerConfig;
pub use dispatch::{service_routes, AppState};
pub use server::HttpServer;
