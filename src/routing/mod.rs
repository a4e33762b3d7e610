//! # Request Routing
//!
//! Maps an HTTP method and path to a handler, extracting placeholder
//! segments as named parameters.

pub mod errors;
pub mod pattern;
pub mod table;

pub use errors::{RouteError, RouteResult};
pub use pattern::{RouteParams, RoutePattern, Segment};
pub use table::{Route, RouteMatch, RouteTable};
