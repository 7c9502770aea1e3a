//! Repository contracts and SQLite persistence implementations.
//!
//! # Responsibility
//! - Define the product data access contract.
//! - Keep SQL text and driver error details inside the persistence boundary.
//!
//! # Invariants
//! - Repository APIs return the `RepoError` taxonomy only.

pub mod error;
pub mod product_repo;
