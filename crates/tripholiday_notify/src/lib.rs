// --- File: crates/tripholiday_notify/src/lib.rs ---
//! Booking notifications over email (SMTP) and SMS (Twilio).

pub mod email;
pub mod error;
pub mod service;
pub mod sms;
pub mod templates;

#[cfg(test)]
mod templates_test;

pub use email::SmtpMailer;
pub use error::NotifyError;
pub use service::{BookingNotifications, NotificationChannels, MOCK_EMAIL_ID, MOCK_SMS_ID};
pub use sms::send_twilio_sms;
