// --- File: crates/tripholiday_razorpay/src/lib.rs ---
//! Razorpay integration: creating orders for the checkout widget and checking
//! the payment signature it hands back.

pub mod error;
pub mod logic;
pub mod service;

#[cfg(test)]
mod logic_test;

pub use error::RazorpayError;
pub use logic::{create_order, payment_signature, verify_payment_signature, RazorpayOrder};
pub use service::RazorpayGateway;
