// --- File: crates/tripholiday_notify/tests/notification_channels_test.rs ---
use serde_json::json;
use std::sync::Arc;
use tripholiday_common::models::Booking;
use tripholiday_common::services::{
    BoxFuture, BoxedError, BoxedService, BookingNotifier, NotificationResult, NotificationService,
};
use tripholiday_common::HttpStatusCode;
use tripholiday_config::{CompanyConfig, SmtpConfig, TwilioConfig};
use tripholiday_notify::{
    send_twilio_sms, BookingNotifications, NotificationChannels, NotifyError, SmtpMailer,
    MOCK_EMAIL_ID, MOCK_SMS_ID,
};
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn twilio_config(base: &str) -> TwilioConfig {
    TwilioConfig {
        account_sid: "AC123".into(),
        auth_token: "tok_456".into(),
        phone_number: "+15005550006".into(),
        api_base_url: base.to_string(),
    }
}

fn booking(pending: f64) -> Booking {
    let paid = 150000.0 - pending;
    let partial = pending > 0.0;
    serde_json::from_value(json!({
        "id": "65f1c2a9b8e4d3f2a1b0c9d8",
        "guestDetails": { "name": "Asha Verma", "email": "asha@example.com", "phone": "+919876543210" },
        "packageDetails": { "packageType": "with-flight", "basePrice": 150000 },
        "travelers": { "adults": { "count": 2 } },
        "pricing": { "basePrice": 150000, "travelersCharge": 0, "totalAmount": 150000 },
        "payment": {
            "status": "partial",
            "paidAmount": paid,
            "pendingAmount": pending,
            "isPartialPayment": partial
        },
        "bookingStatus": "confirmed",
        "createdAt": "2026-10-11T09:30:00Z",
        "updatedAt": "2026-10-11T09:30:00Z"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_twilio_sms_posts_form_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Accounts/AC123/Messages.json"))
        .and(basic_auth("AC123", "tok_456"))
        .and(body_string_contains("To=%2B919876543210"))
        .and(body_string_contains("From=%2B15005550006"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sid": "SM42", "status": "queued" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = send_twilio_sms(&twilio_config(&server.uri()), "+919876543210", "hello")
        .await
        .unwrap();
    assert_eq!(result.id, "SM42");
    assert_eq!(result.status, "queued");
}

#[tokio::test]
async fn test_twilio_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "status": 400
        })))
        .mount(&server)
        .await;

    let err = send_twilio_sms(&twilio_config(&server.uri()), "123", "hello")
        .await
        .unwrap_err();
    match &err {
        NotifyError::TwilioApiError {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 400);
            assert!(message.contains("not a valid phone number"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let trip: tripholiday_common::TripError = err.into();
    assert_eq!(trip.status_code(), 502);
}

#[tokio::test]
async fn test_missing_twilio_credentials_is_config_error() {
    let mut config = twilio_config("http://127.0.0.1:9");
    config.auth_token.clear();
    let err = send_twilio_sms(&config, "+919876543210", "hello")
        .await
        .unwrap_err();
    assert!(matches!(err, NotifyError::ConfigError(_)));
}

#[tokio::test]
async fn test_disabled_channels_report_mock_delivery() {
    let channels = NotificationChannels::mock();
    assert!(!channels.email_enabled());
    assert!(!channels.sms_enabled());

    let email = channels
        .send_email("asha@example.com", "Hi", "<p>Hi</p>", true)
        .await
        .unwrap();
    assert_eq!(email.id, MOCK_EMAIL_ID);
    let sms = channels.send_sms("+919876543210", "Hi").await.unwrap();
    assert_eq!(sms.id, MOCK_SMS_ID);
    assert_eq!(sms.status, "mock");
}

#[tokio::test]
async fn test_sms_channel_uses_twilio_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Accounts/AC123/Messages.json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "sid": "SM7", "status": "queued" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let channels = NotificationChannels::new(None, Some(twilio_config(&server.uri())));
    let sms = channels.send_sms("+919876543210", "Hi").await.unwrap();
    assert_eq!(sms.id, "SM7");
}

#[test]
fn test_smtp_message_uses_configured_sender() {
    let mailer = SmtpMailer::from_config(&SmtpConfig {
        host: "smtp.example.com".into(),
        port: 587,
        user: "mailer@example.com".into(),
        pass: "pw".into(),
        from_name: "Trip Holiday".into(),
        from_address: Some("bookings@tripholiday.in".into()),
    })
    .unwrap();
    assert_eq!(mailer.from_mailbox().email.to_string(), "bookings@tripholiday.in");

    let message = mailer
        .build_message("asha@example.com", "Booking Confirmation - TH1", "<p>hi</p>", true)
        .unwrap();
    let raw = String::from_utf8(message.formatted()).unwrap();
    assert!(raw.contains("bookings@tripholiday.in"));
    assert!(raw.contains("Subject: Booking Confirmation - TH1"));
    assert!(raw.contains("text/html"));

    let err = mailer
        .build_message("not an address", "x", "y", false)
        .unwrap_err();
    assert!(matches!(err, NotifyError::InvalidAddress { .. }));
}

/// Email always fails, SMS always succeeds.
struct BrokenMailbox;

impl NotificationService for BrokenMailbox {
    type Error = NotifyError;

    fn send_email(
        &self,
        _to: &str,
        _subject: &str,
        _body: &str,
        _is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async { Err(NotifyError::SmtpError("connection refused".into())) })
    }

    fn send_sms(&self, _to: &str, _body: &str) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async {
            Ok(NotificationResult {
                id: "SM1".into(),
                status: "queued".into(),
            })
        })
    }
}

#[tokio::test]
async fn test_failed_channel_is_reported_not_raised() {
    let channels: Arc<dyn NotificationService<Error = BoxedError>> =
        Arc::new(BoxedService(BrokenMailbox));
    let notifier = BookingNotifications::new(channels, CompanyConfig::default());

    let outcome = notifier.send_confirmation(&booking(50000.0)).await.unwrap();
    assert!(!outcome.email);
    assert!(outcome.sms);
}

#[tokio::test]
async fn test_reminder_requires_pending_amount() {
    let channels: Arc<dyn NotificationService<Error = BoxedError>> =
        Arc::new(BoxedService(NotificationChannels::mock()));
    let notifier = BookingNotifications::new(channels, CompanyConfig::default());

    let err = notifier
        .send_payment_reminder(&booking(0.0))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "No pending payment for this booking");

    let outcome = notifier
        .send_payment_reminder(&booking(50000.0))
        .await
        .unwrap();
    assert!(outcome.email && outcome.sms);
}
