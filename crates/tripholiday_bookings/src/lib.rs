// --- File: crates/tripholiday_bookings/src/lib.rs ---
//! Guest bookings and the Razorpay checkout around them.
//!
//! A booking is stored unpaid, a gateway order is opened for the amount the
//! guest wants to pay now, and the signed callback from the checkout widget
//! books the payment and triggers the confirmation email and SMS.

pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;

#[cfg(test)]
mod logic_test;

// Re-export for main backend
pub use logic::BookingsState;
pub use routes::routes;
