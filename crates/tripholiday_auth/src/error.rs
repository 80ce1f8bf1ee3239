// --- File: crates/tripholiday_auth/src/error.rs ---
use thiserror::Error;
use tripholiday_common::TripError;
use tripholiday_db::DbError;

pub const NOT_AUTHORIZED: &str = "Not authorized to access this route";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login or registration input is incomplete or malformed
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account has been deactivated")]
    Deactivated,

    /// No usable token or account behind it
    #[error("{0}")]
    Unauthorized(String),

    #[error("Role {0} is not authorized to access this route")]
    RoleNotAllowed(String),

    #[error("JWT configuration error: {0}")]
    Config(String),

    #[error("Failed to issue token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<AuthError> for TripError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::BadRequest(message) => TripError::ValidationError(message),
            AuthError::InvalidCredentials | AuthError::Unauthorized(_) => {
                TripError::AuthError(err.to_string())
            }
            AuthError::Deactivated | AuthError::RoleNotAllowed(_) => {
                TripError::ForbiddenError(err.to_string())
            }
            AuthError::Config(_) => TripError::ConfigError(err.to_string()),
            AuthError::TokenIssue(_) | AuthError::PasswordHash(_) => {
                TripError::InternalError(err.to_string())
            }
            AuthError::Db(db) => db.into(),
        }
    }
}
