// --- File: crates/tripholiday_razorpay/src/service.rs ---
use std::sync::Arc;
use tripholiday_common::is_razorpay_enabled;
use tripholiday_common::services::{BoxFuture, PaymentGateway, PaymentOrder, PaymentOrderRequest};
use tripholiday_config::{AppConfig, RazorpayConfig};

use crate::error::RazorpayError;
use crate::logic::{create_order, verify_payment_signature};

/// Razorpay implementation of [`PaymentGateway`].
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    config: RazorpayConfig,
}

impl RazorpayGateway {
    pub fn new(config: RazorpayConfig) -> Self {
        Self { config }
    }

    /// `None` unless `use_razorpay` is on and the `razorpay` section is present.
    pub fn from_app_config(config: &Arc<AppConfig>) -> Option<Self> {
        if !is_razorpay_enabled(config) {
            return None;
        }
        config.razorpay.clone().map(Self::new)
    }
}

impl PaymentGateway for RazorpayGateway {
    type Error = RazorpayError;

    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    fn create_order(
        &self,
        request: PaymentOrderRequest,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
        Box::pin(async move {
            create_order(
                &self.config,
                request.amount,
                &request.currency,
                &request.receipt,
                &request.notes,
            )
            .await
        })
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        verify_payment_signature(order_id, payment_id, signature, &self.config.key_secret)
    }
}
