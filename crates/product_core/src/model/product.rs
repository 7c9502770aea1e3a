//! Product entity and warehouse projection.
//!
//! # Responsibility
//! - Hold the persisted product shape and the joined warehouse view.
//!
//! # Invariants
//! - `id == 0` means the product has not been created yet.
//! - `code_value` is unique across products; the store enforces it, this
//!   model does not.
//! - `warehouse_id == None` means "no associated warehouse".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned product identity.
pub type ProductId = i64;

/// Identity of the warehouse that owns a product.
pub type WarehouseId = i64;

/// Identity value carried by a product that was never saved.
pub const UNSAVED_PRODUCT_ID: ProductId = 0;

/// Canonical product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store on `save`; `0` before creation.
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Externally meaningful code, unique per product.
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<Utc>,
    /// Monetary amount in the catalogue's implicit currency.
    pub price: f64,
    /// Owning warehouse. Stored as `NULL` when unset.
    pub warehouse_id: Option<WarehouseId>,
}

impl Product {
    /// Creates an unsaved, unpublished product with no warehouse.
    pub fn new(
        name: impl Into<String>,
        code_value: impl Into<String>,
        quantity: u32,
        price: f64,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UNSAVED_PRODUCT_ID,
            name: name.into(),
            quantity,
            code_value: code_value.into(),
            is_published: false,
            expiration,
            price,
            warehouse_id: None,
        }
    }

    /// Returns whether the store has assigned an identity yet.
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_PRODUCT_ID
    }
}

/// Read-only view of a product joined with its owning warehouse.
///
/// Only produced by a lookup whose product references an existing
/// warehouse row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithWarehouse {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<Utc>,
    pub price: f64,
    pub warehouse_name: String,
    pub warehouse_address: String,
    pub warehouse_capacity: u32,
    pub warehouse_telephone: String,
}
