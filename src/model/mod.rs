//! # Product Model
//!
//! The single entity served by this crate.
//!
//! A product that has not been stored yet has no identifier, so it is
//! represented by [`ProductAttributes`] alone. Once the store assigns an id
//! it becomes a [`Product`].

use serde::{Deserialize, Serialize};

use crate::jsonapi::Resource;

/// Writable fields of a product, as they appear under `attributes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub name: String,
    pub price: i64,
}

impl ProductAttributes {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A stored product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned identifier, always > 0
    pub id: u64,
    pub name: String,
    pub price: i64,
}

impl Product {
    /// Attach an identifier to a set of attributes
    pub fn from_attributes(id: u64, attributes: ProductAttributes) -> Self {
        Self {
            id,
            name: attributes.name,
            price: attributes.price,
        }
    }
}

impl Resource for Product {
    const TYPE: &'static str = "products";

    type Attributes = ProductAttributes;

    fn id(&self) -> u64 {
        self.id
    }

    fn attributes(&self) -> ProductAttributes {
        ProductAttributes {
            name: self.name.clone(),
            price: self.price,
        }
    }
}
