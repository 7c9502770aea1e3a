//! Domain vocabulary for product persistence.
//!
//! # Responsibility
//! - Define the canonical `Product` entity and its warehouse read model.
//! - Stay free of any storage technology.
//!
//! # Invariants
//! - `Product::id` is assigned by the store and never changes afterwards.
//! - `ProductWithWarehouse` is derived and never persisted.

pub mod product;
