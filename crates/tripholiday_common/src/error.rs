// --- File: crates/tripholiday_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the Trip Holiday backend.
///
/// Every crate defines its own error enum and implements
/// `From<ItsError> for TripError`, so handlers can use `?` and let
/// `IntoResponse` pick the status code.
#[derive(Error, Debug)]
pub enum TripError {
    /// Error occurred during an outbound HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing or invalid credentials
    #[error("{0}")]
    AuthError(String),

    /// Authenticated, but not allowed to do this
    #[error("{0}")]
    ForbiddenError(String),

    /// The request failed validation
    #[error("{0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("{service_name} error: {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// A feature the request needs is switched off
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("{0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("{0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TripError {
    fn status_code(&self) -> u16 {
        match self {
            TripError::HttpError(_) => 500,
            TripError::ParseError(_) => 400,
            TripError::ConfigError(_) => 500,
            TripError::AuthError(_) => 401,
            TripError::ForbiddenError(_) => 403,
            TripError::ValidationError(_) => 400,
            TripError::DatabaseError(_) => 500,
            TripError::ExternalServiceError { .. } => 502,
            TripError::ServiceUnavailable(_) => 503,
            TripError::ConflictError(_) => 409,
            TripError::NotFoundError(_) => 404,
            TripError::InternalError(_) => 500,
        }
    }
}

impl TripError {
    /// The text shown to API clients.
    ///
    /// Server-side failures are reported generically; the details go to the log.
    pub fn public_message(&self) -> String {
        match self {
            TripError::HttpError(_)
            | TripError::ConfigError(_)
            | TripError::DatabaseError(_)
            | TripError::InternalError(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, TripError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, TripError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| TripError::InternalError(format!("{}: {}", context, error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for TripError {
    fn from(err: reqwest::Error) -> Self {
        TripError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        TripError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        TripError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> TripError {
    TripError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> TripError {
    TripError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> TripError {
    TripError::AuthError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> TripError {
    TripError::ForbiddenError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> TripError {
    TripError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> TripError {
    TripError::ConflictError(message.to_string())
}

pub fn service_unavailable<T: fmt::Display>(message: T) -> TripError {
    TripError::ServiceUnavailable(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> TripError {
    TripError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> TripError {
    TripError::InternalError(message.to_string())
}
