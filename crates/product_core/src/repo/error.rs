//! Product repository error taxonomy and driver error translation.
//!
//! # Invariants
//! - Raw driver errors never leave the repository as a matchable value;
//!   they are wrapped in the opaque `StorageError`.
//! - Uniqueness violations are recognised by SQLite extended result code,
//!   never by message text.

use crate::model::product::ProductId;
use rusqlite::ffi;
use rusqlite::ErrorCode;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Stable error kinds returned by product repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    /// No row matched the requested identity.
    #[error("product not found: {0}")]
    NotFound(ProductId),
    /// A uniqueness constraint rejected the write. Carries the store detail.
    #[error("product already exists: {0}")]
    AlreadyExists(String),
    /// A statement affected more rows than the identity model permits.
    #[error("product invariant violated: {0}")]
    InvariantViolation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Opaque storage failure (connectivity, SQL, untranslated constraints).
#[derive(Debug, Error)]
#[error("storage failure: {0}")]
pub struct StorageError(#[source] rusqlite::Error);

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(StorageError(value))
    }
}

/// Translates a failure of an identity-scoped read.
pub(crate) fn map_read_error(err: rusqlite::Error, id: ProductId) -> RepoError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepoError::NotFound(id),
        other => other.into(),
    }
}

/// Translates a failure of an insert or update.
pub(crate) fn map_write_error(err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(failure, detail) if is_uniqueness_violation(&failure) => {
            RepoError::AlreadyExists(detail.unwrap_or_else(|| failure.to_string()))
        }
        other => other.into(),
    }
}

fn is_uniqueness_violation(failure: &ffi::Error) -> bool {
    failure.code == ErrorCode::ConstraintViolation
        && matches!(
            failure.extended_code,
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        )
}

#[cfg(test)]
mod tests {
    use super::{map_read_error, map_write_error, RepoError};
    use rusqlite::ffi;
    use std::error::Error;

    fn sqlite_failure(extended_code: i32, detail: Option<&str>) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            ffi::Error::new(extended_code),
            detail.map(str::to_string),
        )
    }

    #[test]
    fn no_rows_becomes_not_found_with_requested_id() {
        let err = map_read_error(rusqlite::Error::QueryReturnedNoRows, 42);
        assert!(matches!(err, RepoError::NotFound(42)));
    }

    #[test]
    fn other_read_failures_stay_opaque() {
        let err = map_read_error(rusqlite::Error::InvalidQuery, 1);
        assert!(matches!(err, RepoError::Storage(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn unique_violation_becomes_already_exists() {
        let err = map_write_error(sqlite_failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            Some("UNIQUE constraint failed: products.code_value"),
        ));
        match err {
            RepoError::AlreadyExists(detail) => assert!(detail.contains("code_value")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn primary_key_violation_becomes_already_exists() {
        let err = map_write_error(sqlite_failure(ffi::SQLITE_CONSTRAINT_PRIMARYKEY, None));
        assert!(matches!(err, RepoError::AlreadyExists(_)));
    }

    #[test]
    fn foreign_key_violation_is_not_translated() {
        let err = map_write_error(sqlite_failure(
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            Some("FOREIGN KEY constraint failed"),
        ));
        assert!(matches!(err, RepoError::Storage(_)));
    }

    #[test]
    fn busy_database_is_not_translated() {
        let err = map_write_error(sqlite_failure(ffi::SQLITE_BUSY, None));
        assert!(matches!(err, RepoError::Storage(_)));
    }
}
