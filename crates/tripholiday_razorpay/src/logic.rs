// --- File: crates/tripholiday_razorpay/src/logic.rs ---
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;
use tracing::{debug, info, warn};
use tripholiday_common::HTTP_CLIENT;
use tripholiday_config::RazorpayConfig;

use crate::error::RazorpayError;

/// An order as Razorpay returns it from `POST /orders`.
pub use tripholiday_common::services::PaymentOrder as RazorpayOrder;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    notes: &'a Value,
}

fn check_config(config: &RazorpayConfig) -> Result<(), RazorpayError> {
    if config.key_id.trim().is_empty() || config.key_secret.trim().is_empty() {
        return Err(RazorpayError::ConfigError(
            "razorpay.key_id and razorpay.key_secret must be set".to_string(),
        ));
    }
    Ok(())
}

/// Pulls `error.description` out of a Razorpay error body, falling back to the raw text.
fn api_error_message(body_text: &str) -> String {
    serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("description"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body_text.to_string())
}

/// Creates a Razorpay order for `amount` minor units (paise for INR).
pub async fn create_order(
    config: &RazorpayConfig,
    amount: i64,
    currency: &str,
    receipt: &str,
    notes: &Value,
) -> Result<RazorpayOrder, RazorpayError> {
    check_config(config)?;

    let api_url = format!("{}/orders", config.api_base_url.trim_end_matches('/'));
    let body = CreateOrderBody {
        amount,
        currency,
        receipt,
        notes,
    };

    debug!("[Razorpay] Creating order: {} {} for {}", amount, currency, receipt);

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(&config.key_id, Some(&config.key_secret))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let order: RazorpayOrder = serde_json::from_str(&body_text)?;
        info!("[Razorpay] Order {} created for {}", order.id, receipt);
        Ok(order)
    } else {
        let message = api_error_message(&body_text);
        warn!(
            "[Razorpay] Order creation failed with HTTP status {}: {}",
            status, message
        );
        Err(RazorpayError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// Hex HMAC-SHA256 of `"{order_id}|{payment_id}"`, as Razorpay signs checkout payments.
pub fn payment_signature(order_id: &str, payment_id: &str, secret: &str) -> String {
    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks the signature handed back by the checkout widget.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    if secret.is_empty() || signature.is_empty() {
        return false;
    }
    let expected = payment_signature(order_id, payment_id, secret);
    constant_time_eq::constant_time_eq(
        expected.as_bytes(),
        signature.trim().to_ascii_lowercase().as_bytes(),
    )
}
