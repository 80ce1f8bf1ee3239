// --- File: crates/tripholiday_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared domain documents
pub mod services; // Service abstractions


// Re-export error types and utilities for easier access
pub use error::{
    auth_error, config_error, conflict, external_service_error, forbidden, internal_error,
    not_found, service_unavailable, validation_error, Context, HttpStatusCode, TripError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    handle_result, json_with_status, map_error, ApiMessage, IntoHttpResponse, JsonBody,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

// Re-export feature flag handling utilities for easier access
pub use features::{is_email_enabled, is_feature_enabled, is_razorpay_enabled, is_sms_enabled};
