// --- File: crates/tripholiday_notify/src/error.rs ---
use thiserror::Error;
use tripholiday_common::{external_service_error, TripError};

/// Notification-specific error types.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Error occurred during a Twilio API request
    #[error("Twilio API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Twilio API
    #[error("Twilio API returned an error: {message} (Status: {status_code})")]
    TwilioApiError { status_code: u16, message: String },

    /// Error parsing the Twilio API response
    #[error("Failed to parse Twilio API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An address lettre refused to parse
    #[error("Invalid email address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Building or delivering the message over SMTP failed
    #[error("SMTP error: {0}")]
    SmtpError(String),

    /// Missing or incomplete SMTP/Twilio configuration
    #[error("Notification configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl From<lettre::transport::smtp::Error> for NotifyError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        NotifyError::SmtpError(err.to_string())
    }
}

impl From<lettre::error::Error> for NotifyError {
    fn from(err: lettre::error::Error) -> Self {
        NotifyError::SmtpError(err.to_string())
    }
}

/// Convert NotifyError to TripError
impl From<NotifyError> for TripError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::InvalidAddress { .. } => TripError::ValidationError(err.to_string()),
            NotifyError::ConfigError(msg) => TripError::ConfigError(msg),
            NotifyError::SmtpError(msg) => external_service_error("SMTP", msg),
            other => external_service_error("Twilio", other),
        }
    }
}
