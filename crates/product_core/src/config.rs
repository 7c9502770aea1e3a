//! Runtime configuration for hosts embedding the product core.
//!
//! # Responsibility
//! - Resolve database location and logging settings from the environment.
//! - Produce a ready connection for `SqliteProductRepository::new`.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - The repository itself takes no configuration beyond its connection.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use rusqlite::Connection;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DB_PATH: &str = "PRODUCT_CORE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PRODUCT_CORE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PRODUCT_CORE_LOG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Host-level settings. The default is an in-memory database without file
/// logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file path; `None` opens a private in-memory database.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` leaves logging untouched.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `PRODUCT_CORE_DB_PATH`, `PRODUCT_CORE_LOG_LEVEL` and
    /// `PRODUCT_CORE_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let log_level = match value(ENV_LOG_LEVEL) {
            Some(level) => normalize_level(&level)?.to_string(),
            None => default_log_level().to_string(),
        };

        Ok(Self {
            db_path: value(ENV_DB_PATH).map(PathBuf::from),
            log_level,
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        })
    }

    /// Starts logging (when `log_dir` is set) and opens the database.
    pub fn open(&self) -> Result<Connection, ConfigError> {
        if let Some(log_dir) = &self.log_dir {
            init_logging(&self.log_level, log_dir)?;
        }

        let conn = match &self.db_path {
            Some(path) => open_db(path)?,
            None => open_db_in_memory()?,
        };
        Ok(conn)
    }
}
