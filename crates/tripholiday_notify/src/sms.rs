// --- File: crates/tripholiday_notify/src/sms.rs ---
use serde::Deserialize;
use tracing::{error, info};
use tripholiday_common::services::NotificationResult;
use tripholiday_common::HTTP_CLIENT;
use tripholiday_config::TwilioConfig;

use crate::error::NotifyError;

/// The parts of Twilio's message resource we keep.
#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: String,
}

/// Sends `body` to `to` through Twilio's Messages API.
pub async fn send_twilio_sms(
    config: &TwilioConfig,
    to: &str,
    body: &str,
) -> Result<NotificationResult, NotifyError> {
    if config.account_sid.is_empty() || config.auth_token.is_empty() {
        return Err(NotifyError::ConfigError(
            "twilio.account_sid and twilio.auth_token must be set".to_string(),
        ));
    }

    let url = format!(
        "{}/Accounts/{}/Messages.json",
        config.api_base_url.trim_end_matches('/'),
        config.account_sid
    );
    let params = [
        ("To", to),
        ("From", config.phone_number.as_str()),
        ("Body", body),
    ];

    let resp = HTTP_CLIENT
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<TwilioErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);
        error!("Twilio returned {}: {}", status, message);
        return Err(NotifyError::TwilioApiError {
            status_code: status.as_u16(),
            message,
        });
    }

    let message: TwilioMessage = serde_json::from_str(&text)?;
    info!("SMS {} queued for {}", message.sid, to);
    Ok(NotificationResult {
        id: message.sid,
        status: message.status,
    })
}
