//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a product store.
///
/// The message is for logs only; it is never sent to clients.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend could not be reached or refused the call
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}
