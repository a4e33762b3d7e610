//! # Product Store
//!
//! Persistence boundary for products. Handlers only see the
//! [`ProductStore`] trait; how rows are kept is up to the implementation.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryProductStore;

use crate::model::{Product, ProductAttributes};

/// CRUD primitives over stored products.
///
/// Calls are synchronous and may block. Implementations own their
/// concurrency control; callers share one handle across requests.
pub trait ProductStore: Send + Sync {
    /// All products, ascending by id
    fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// `None` when no product has this id
    fn find_by_id(&self, id: u64) -> StoreResult<Option<Product>>;

    /// Store a new product and return it with its assigned id
    fn insert(&self, attributes: &ProductAttributes) -> StoreResult<Product>;

    /// Overwrite name and price; returns the number of matched rows
    fn update_by_id(&self, id: u64, attributes: &ProductAttributes) -> StoreResult<u64>;

    /// Returns the number of removed rows
    fn delete_by_id(&self, id: u64) -> StoreResult<u64>;
}
