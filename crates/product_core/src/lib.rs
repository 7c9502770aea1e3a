//! Product persistence core.
//!
//! A storage-agnostic product contract plus its SQLite implementation,
//! including the product/warehouse join read model.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::product::{Product, ProductId, ProductWithWarehouse, WarehouseId};
pub use repo::error::{RepoError, RepoResult, StorageError};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
