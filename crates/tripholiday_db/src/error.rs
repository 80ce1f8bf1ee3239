//! Error types for the database client

use thiserror::Error;
use tripholiday_common::TripError;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A unique key is already taken
    #[error("{0}")]
    Duplicate(String),

    /// A stored row could not be turned back into a document
    #[error("Corrupt record: {0}")]
    DecodeError(String),
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::DecodeError(err.to_string())
    }
}

impl From<DbError> for TripError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate(message) => TripError::ConflictError(message),
            DbError::ConfigError(message) => TripError::ConfigError(message),
            other => TripError::DatabaseError(other.to_string()),
        }
    }
}

/// Maps a unique-constraint violation to [`DbError::Duplicate`].
pub(crate) fn map_unique_violation(err: sqlx::Error, message: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DbError::Duplicate(message.to_string())
        }
        _ => DbError::SqlxError(err),
    }
}
