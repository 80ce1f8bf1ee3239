// --- File: crates/tripholiday_razorpay/src/error.rs ---
use thiserror::Error;
use tripholiday_common::{external_service_error, HttpStatusCode, TripError};

/// Razorpay-specific error types.
#[derive(Error, Debug)]
pub enum RazorpayError {
    /// Error occurred during a Razorpay API request
    #[error("Razorpay API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Razorpay API
    #[error("Razorpay API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Razorpay API response
    #[error("Failed to parse Razorpay API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Razorpay configuration
    #[error("Razorpay configuration missing or incomplete: {0}")]
    ConfigError(String),
}

/// Convert RazorpayError to TripError
impl From<RazorpayError> for TripError {
    fn from(err: RazorpayError) -> Self {
        match err {
            RazorpayError::RequestError(e) => {
                external_service_error("Razorpay", format!("request failed: {}", e))
            }
            RazorpayError::ApiError { message, .. } => external_service_error("Razorpay", message),
            RazorpayError::ParseError(e) => {
                external_service_error("Razorpay", format!("unreadable response: {}", e))
            }
            RazorpayError::ConfigError(msg) => TripError::ConfigError(msg),
        }
    }
}

impl HttpStatusCode for RazorpayError {
    fn status_code(&self) -> u16 {
        match self {
            RazorpayError::RequestError(_) => 502,
            RazorpayError::ApiError { .. } => 502,
            RazorpayError::ParseError(_) => 502,
            RazorpayError::ConfigError(_) => 500,
        }
    }
}
