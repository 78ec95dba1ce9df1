//! SQLx → domain error mapping helpers

use rating_core::error::DomainError;

/// Map any SQLx error into a domain-level database error
pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    DomainError::DatabaseError(err.to_string())
}

/// Map a unique-constraint violation into the given domain error
///
/// Anything other than a unique violation falls through to the generic
/// database error.
pub(crate) fn map_unique_violation<F>(err: sqlx::Error, on_conflict: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return on_conflict();
        }
    }
    map_db_error(err)
}
