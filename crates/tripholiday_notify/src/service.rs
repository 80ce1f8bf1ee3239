// --- File: crates/tripholiday_notify/src/service.rs ---
use std::sync::Arc;
use tracing::{info, warn};
use tripholiday_common::models::Booking;
use tripholiday_common::services::{
    BoxFuture, BoxedError, BookingNotifier, NotificationOutcome, NotificationResult,
    NotificationService,
};
use tripholiday_common::{is_email_enabled, is_sms_enabled, validation_error, TripError};
use tripholiday_config::{AppConfig, CompanyConfig, TwilioConfig};

use crate::email::SmtpMailer;
use crate::error::NotifyError;
use crate::sms::send_twilio_sms;
use crate::templates;

pub const MOCK_EMAIL_ID: &str = "MOCK_EMAIL_ID";
pub const MOCK_SMS_ID: &str = "MOCK_SMS_ID";
pub const MOCK_STATUS: &str = "mock";

fn mock_result(id: &str) -> NotificationResult {
    NotificationResult {
        id: id.to_string(),
        status: MOCK_STATUS.to_string(),
    }
}

/// Email over SMTP and SMS over Twilio.
///
/// A channel that is not configured logs the message and reports a mock
/// delivery, so development setups behave like production ones.
#[derive(Debug, Default)]
pub struct NotificationChannels {
    smtp: Option<SmtpMailer>,
    twilio: Option<TwilioConfig>,
}

impl NotificationChannels {
    pub fn new(smtp: Option<SmtpMailer>, twilio: Option<TwilioConfig>) -> Self {
        Self { smtp, twilio }
    }

    /// Both channels log only.
    pub fn mock() -> Self {
        Self::default()
    }

    pub fn from_app_config(config: &Arc<AppConfig>) -> Self {
        let smtp = if is_email_enabled(config) {
            config
                .smtp
                .as_ref()
                .and_then(|smtp| match SmtpMailer::from_config(smtp) {
                    Ok(mailer) => Some(mailer),
                    Err(e) => {
                        warn!("SMTP disabled, could not set up transport: {}", e);
                        None
                    }
                })
        } else {
            None
        };
        let twilio = if is_sms_enabled(config) {
            config.twilio.clone()
        } else {
            None
        };

        info!(
            "Notification channels: email {}, sms {}",
            if smtp.is_some() { "smtp" } else { "mock" },
            if twilio.is_some() { "twilio" } else { "mock" }
        );
        Self { smtp, twilio }
    }

    pub fn email_enabled(&self) -> bool {
        self.smtp.is_some()
    }

    pub fn sms_enabled(&self) -> bool {
        self.twilio.is_some()
    }
}

impl NotificationService for NotificationChannels {
    type Error = NotifyError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();

        Box::pin(async move {
            match &self.smtp {
                Some(mailer) => mailer.send(&to, &subject, &body, is_html).await,
                None => {
                    info!("[mock email] to {}: {}", to, subject);
                    Ok(mock_result(MOCK_EMAIL_ID))
                }
            }
        })
    }

    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let body = body.to_string();

        Box::pin(async move {
            match &self.twilio {
                Some(config) => send_twilio_sms(config, &to, &body).await,
                None => {
                    info!("[mock sms] to {}: {}", to, body);
                    Ok(mock_result(MOCK_SMS_ID))
                }
            }
        })
    }
}

/// Renders the booking templates and hands them to a [`NotificationService`].
pub struct BookingNotifications {
    channels: Arc<dyn NotificationService<Error = BoxedError>>,
    company: CompanyConfig,
}

impl BookingNotifications {
    pub fn new(
        channels: Arc<dyn NotificationService<Error = BoxedError>>,
        company: CompanyConfig,
    ) -> Self {
        Self { channels, company }
    }

    async fn deliver(
        &self,
        booking: &Booking,
        email: templates::EmailContent,
        sms: String,
    ) -> NotificationOutcome {
        let reference = booking.booking_reference();
        let guest = &booking.guest_details;

        let email_sent = match self
            .channels
            .send_email(&guest.email, &email.subject, &email.html, true)
            .await
        {
            Ok(result) => {
                info!("Email for booking {} delivered ({})", reference, result.id);
                true
            }
            Err(e) => {
                warn!("Email for booking {} failed: {}", reference, e);
                false
            }
        };

        let sms_sent = match self.channels.send_sms(&guest.phone, &sms).await {
            Ok(result) => {
                info!("SMS for booking {} delivered ({})", reference, result.id);
                true
            }
            Err(e) => {
                warn!("SMS for booking {} failed: {}", reference, e);
                false
            }
        };

        NotificationOutcome {
            email: email_sent,
            sms: sms_sent,
        }
    }
}

impl BookingNotifier for BookingNotifications {
    fn send_confirmation<'a>(
        &'a self,
        booking: &'a Booking,
    ) -> BoxFuture<'a, NotificationOutcome, TripError> {
        Box::pin(async move {
            let email = templates::confirmation_email(booking, &self.company);
            let sms = templates::confirmation_sms(booking, &self.company);
            Ok(self.deliver(booking, email, sms).await)
        })
    }

    fn send_payment_reminder<'a>(
        &'a self,
        booking: &'a Booking,
    ) -> BoxFuture<'a, NotificationOutcome, TripError> {
        Box::pin(async move {
            if booking.payment.pending_amount <= 0.0 {
                return Err(validation_error("No pending payment for this booking"));
            }
            let email = templates::payment_reminder_email(booking, &self.company);
            let sms = templates::payment_reminder_sms(booking, &self.company);
            Ok(self.deliver(booking, email, sms).await)
        })
    }
}
