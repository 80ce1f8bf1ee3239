// --- File: crates/services/tripholiday_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the payment gateway and the notification channels from the
//! application configuration and hands them out behind the
//! [`ServiceFactory`] trait objects the booking handlers use.
use std::sync::Arc;
use tracing::info;
use tripholiday_common::services::{
    BookingNotifier, BoxedError, BoxedService, NotificationService, PaymentGateway,
    ServiceFactory,
};
use tripholiday_config::AppConfig;
use tripholiday_notify::{BookingNotifications, NotificationChannels};
use tripholiday_razorpay::RazorpayGateway;

/// Service factory for the running server.
pub struct TripServiceFactory {
    payment_gateway: Option<Arc<dyn PaymentGateway<Error = BoxedError>>>,
    notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
    booking_notifier: Arc<dyn BookingNotifier>,
}

impl TripServiceFactory {
    /// Create a new service factory.
    ///
    /// Razorpay is only wired in when `use_razorpay` is set and the section
    /// exists. Email and SMS fall back to log-only delivery.
    pub fn new(config: &Arc<AppConfig>) -> Self {
        let payment_gateway = match RazorpayGateway::from_app_config(config) {
            Some(gateway) => {
                info!("Razorpay payment gateway enabled");
                Some(Arc::new(BoxedService(gateway)) as Arc<dyn PaymentGateway<Error = BoxedError>>)
            }
            None => {
                info!("Razorpay payment gateway disabled");
                None
            }
        };

        let notification_service: Arc<dyn NotificationService<Error = BoxedError>> =
            Arc::new(BoxedService(NotificationChannels::from_app_config(config)));
        let booking_notifier = Arc::new(BookingNotifications::new(
            notification_service.clone(),
            config.company.clone(),
        ));

        Self {
            payment_gateway,
            notification_service,
            booking_notifier,
        }
    }
}

impl ServiceFactory for TripServiceFactory {
    fn payment_gateway(&self) -> Option<Arc<dyn PaymentGateway<Error = BoxedError>>> {
        self.payment_gateway.clone()
    }

    fn notification_service(&self) -> Arc<dyn NotificationService<Error = BoxedError>> {
        self.notification_service.clone()
    }

    fn booking_notifier(&self) -> Arc<dyn BookingNotifier> {
        self.booking_notifier.clone()
    }
}

/// Mock implementations for testing.
pub mod mock {
    use super::*;
    use tripholiday_config::CompanyConfig;

    /// No payment gateway, log-only notifications.
    pub struct MockServiceFactory {
        notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
        booking_notifier: Arc<dyn BookingNotifier>,
    }

    impl Default for MockServiceFactory {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockServiceFactory {
        /// Create a new mock service factory.
        pub fn new() -> Self {
            let notification_service: Arc<dyn NotificationService<Error = BoxedError>> =
                Arc::new(BoxedService(NotificationChannels::mock()));
            let booking_notifier = Arc::new(BookingNotifications::new(
                notification_service.clone(),
                CompanyConfig::default(),
            ));
            Self {
                notification_service,
                booking_notifier,
            }
        }
    }

    impl ServiceFactory for MockServiceFactory {
        fn payment_gateway(&self) -> Option<Arc<dyn PaymentGateway<Error = BoxedError>>> {
            None
        }

        fn notification_service(&self) -> Arc<dyn NotificationService<Error = BoxedError>> {
            self.notification_service.clone()
        }

        fn booking_notifier(&self) -> Arc<dyn BookingNotifier> {
            self.booking_notifier.clone()
        }
    }
}
