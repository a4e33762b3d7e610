//! product-api - a JSON:API service for a product catalogue
//!
//! Requests flow through the route table in [`routing`] to the handlers in
//! [`rest_api`], which speak JSON:API via [`jsonapi`] and persist through a
//! [`store::ProductStore`].

pub mod cli;
pub mod http_server;
pub mod jsonapi;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod routing;
pub mod store;
