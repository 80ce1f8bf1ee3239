// --- File: crates/tripholiday_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! Handlers talk to the payment gateway and the notification channels only
//! through these traits, so tests can swap in fakes and a disabled
//! integration is just a missing (or mock) service.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{external_service_error, TripError};
use crate::models::Booking;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

impl From<BoxedError> for TripError {
    fn from(err: BoxedError) -> Self {
        // Keep the concrete error's own mapping when there is one
        match err.0.downcast::<TripError>() {
            Ok(trip_error) => *trip_error,
            Err(other) => external_service_error("External service", other),
        }
    }
}

/// A trait for payment gateway operations.
pub trait PaymentGateway: Send + Sync {
    /// Error type returned by payment gateway operations.
    type Error: StdError + Send + Sync + 'static;

    /// The public key id the checkout widget is opened with.
    fn key_id(&self) -> &str;

    /// Currency orders are created in.
    fn currency(&self) -> &str;

    /// Create an order for `request.amount` minor units.
    fn create_order(&self, request: PaymentOrderRequest)
        -> BoxFuture<'_, PaymentOrder, Self::Error>;

    /// Check the signature the checkout widget hands back after payment.
    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: StdError + Send + Sync + 'static;

    /// Send an email notification.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;

    /// Send an SMS notification.
    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Customer-facing messages about a booking.
///
/// Implementations deliver over every channel they have and report which
/// ones succeeded. A failing channel is logged, not returned as an error.
pub trait BookingNotifier: Send + Sync {
    fn send_confirmation<'a>(
        &'a self,
        booking: &'a Booking,
    ) -> BoxFuture<'a, NotificationOutcome, TripError>;

    /// Fails with a validation error when nothing is pending on the booking.
    fn send_payment_reminder<'a>(
        &'a self,
        booking: &'a Booking,
    ) -> BoxFuture<'a, NotificationOutcome, TripError>;
}

/// A factory for creating service instances.
pub trait ServiceFactory: Send + Sync {
    /// `None` when Razorpay is switched off.
    fn payment_gateway(&self) -> Option<Arc<dyn PaymentGateway<Error = BoxedError>>>;

    /// Raw email and SMS channels. Disabled channels deliver to the log.
    fn notification_service(&self) -> Arc<dyn NotificationService<Error = BoxedError>>;

    /// Booking templates on top of [`ServiceFactory::notification_service`].
    fn booking_notifier(&self) -> Arc<dyn BookingNotifier>;
}

/// Erases a service's error type into [`BoxedError`] so it fits the
/// trait objects handed out by a [`ServiceFactory`].
pub struct BoxedService<S>(pub S);

impl<S> PaymentGateway for BoxedService<S>
where
    S: PaymentGateway,
{
    type Error = BoxedError;

    fn key_id(&self) -> &str {
        self.0.key_id()
    }

    fn currency(&self) -> &str {
        self.0.currency()
    }

    fn create_order(
        &self,
        request: PaymentOrderRequest,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
        let fut = self.0.create_order(request);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        self.0.verify_payment_signature(order_id, payment_id, signature)
    }
}

impl<S> NotificationService for BoxedService<S>
where
    S: NotificationService,
{
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let fut = self.0.send_email(to, subject, body, is_html);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let fut = self.0.send_sms(to, body);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// Input for [`PaymentGateway::create_order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOrderRequest {
    /// Amount in minor units (paise).
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    #[serde(default)]
    pub notes: serde_json::Value,
}

/// An order as issued by the gateway. Field names follow the gateway's API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentOrder {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub notes: serde_json::Value,
    #[serde(default)]
    pub created_at: i64,
}

/// Data structures for notification service operations.
/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationResult {
    /// The ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}

/// Which channels delivered a booking notification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationOutcome {
    pub email: bool,
    pub sms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{not_found, HttpStatusCode};

    #[derive(Debug, thiserror::Error)]
    #[error("gateway said no")]
    struct GatewayDown;

    struct FailingGateway;

    impl PaymentGateway for FailingGateway {
        type Error = GatewayDown;

        fn key_id(&self) -> &str {
            "rzp_test_key"
        }

        fn currency(&self) -> &str {
            "INR"
        }

        fn create_order(
            &self,
            _request: PaymentOrderRequest,
        ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
            Box::pin(async { Err(GatewayDown) })
        }

        fn verify_payment_signature(&self, _: &str, _: &str, signature: &str) -> bool {
            signature == "good"
        }
    }

    #[tokio::test]
    async fn test_boxed_service_erases_error() {
        let gateway: Arc<dyn PaymentGateway<Error = BoxedError>> =
            Arc::new(BoxedService(FailingGateway));
        assert_eq!(gateway.key_id(), "rzp_test_key");
        assert!(gateway.verify_payment_signature("o", "p", "good"));

        let err = gateway
            .create_order(PaymentOrderRequest {
                amount: 100,
                currency: "INR".into(),
                receipt: "r".into(),
                notes: serde_json::Value::Null,
            })
            .await
            .unwrap_err();
        let trip: TripError = err.into();
        assert_eq!(trip.status_code(), 502);
        assert!(trip.to_string().contains("gateway said no"));
    }

    #[test]
    fn test_boxed_trip_error_keeps_its_status() {
        let boxed = BoxedError(Box::new(not_found("Booking not found")));
        let trip: TripError = boxed.into();
        assert_eq!(trip.status_code(), 404);
    }
}
