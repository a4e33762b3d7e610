//! Observability for the product API
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence
//! over the filter passed in from configuration.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Observability error
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// The filter directive could not be parsed
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Parse a filter directive such as `info` or `product_api=debug,tower_http=info`
pub fn parse_filter(filter: &str) -> ObservabilityResult<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| ObservabilityError::InvalidFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// Install the fmt subscriber.
///
/// Uses `RUST_LOG` when it is set and valid, otherwise `default_filter`.
pub fn init_tracing(default_filter: &str) -> ObservabilityResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInstalled(e.to_string()))
}
