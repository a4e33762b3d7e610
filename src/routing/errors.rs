//! # Routing Errors

use thiserror::Error;

/// Result type for route registration and dispatch
pub type RouteResult<T> = Result<T, RouteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    // ==================
    // Configuration errors (startup)
    // ==================
    /// Pattern text could not be parsed
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Same method and same literal structure as an existing binding
    #[error("Route {method} {pattern} conflicts with {method} {existing}")]
    DuplicateRoute {
        method: String,
        pattern: String,
        existing: String,
    },

    // ==================
    // Dispatch errors (per request)
    // ==================
    /// No binding matches the method and path
    #[error("No route matches {method} {path}")]
    NoRoute { method: String, path: String },
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error comes from registering routes rather than serving
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, RouteError::NoRoute { .. })
    }
}
