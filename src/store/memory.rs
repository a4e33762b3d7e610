//! # In-Memory Product Store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::warn;

use super::errors::{StoreError, StoreResult};
use super::ProductStore;
use crate::model::{Product, ProductAttributes};

/// Product table held in process memory.
///
/// Ids come from an auto-increment counter starting at 1 and are never
/// reused, even after a delete. A counter value of 0 means the id space is
/// exhausted.
#[derive(Debug)]
pub struct InMemoryProductStore {
    rows: RwLock<BTreeMap<u64, ProductAttributes>>,
    next_id: AtomicU64,
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Pre-populate with products that already have ids.
    ///
    /// The counter continues after the highest seeded id. Products with
    /// id 0 are skipped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let rows: BTreeMap<u64, ProductAttributes> = products
            .into_iter()
            .filter(|p| {
                if p.id == 0 {
                    warn!(name = %p.name, "skipping seeded product with id 0");
                }
                p.id != 0
            })
            .map(|p| (p.id, ProductAttributes::new(p.name, p.price)))
            .collect();
        let next_id = rows
            .keys()
            .next_back()
            .map_or(1, |max| max.checked_add(1).unwrap_or(0));

        Self {
            rows: RwLock::new(rows),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.rows.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Take the next id, or `None` once `u64::MAX` has been handed out
    fn allocate_id(&self) -> Option<u64> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| {
                (id != 0).then(|| id.checked_add(1).unwrap_or(0))
            })
            .ok()
    }
}

fn poisoned() -> StoreError {
    StoreError::Internal("Lock poisoned".to_string())
}

impl ProductStore for InMemoryProductStore {
    fn find_all(&self) -> StoreResult<Vec<Product>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .iter()
            .map(|(id, attributes)| Product::from_attributes(*id, attributes.clone()))
            .collect())
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Product>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .get(&id)
            .map(|attributes| Product::from_attributes(id, attributes.clone())))
    }

    fn insert(&self, attributes: &ProductAttributes) -> StoreResult<Product> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let id = self
            .allocate_id()
            .ok_or_else(|| StoreError::Internal("id space exhausted".to_string()))?;
        if rows.contains_key(&id) {
            return Err(StoreError::Internal(format!("id {} unavailable", id)));
        }
        rows.insert(id, attributes.clone());
        Ok(Product::from_attributes(id, attributes.clone()))
    }

    fn update_by_id(&self, id: u64, attributes: &ProductAttributes) -> StoreResult<u64> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        match rows.get_mut(&id) {
            Some(row) => {
                *row = attributes.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<u64> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        Ok(rows.remove(&id).map_or(0, |_| 1))
    }
}
