// --- File: crates/tripholiday_notify/src/email.rs ---
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;
use tripholiday_common::services::NotificationResult;
use tripholiday_config::SmtpConfig;

use crate::error::NotifyError;

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// SMTP sender over a STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from.to_string())
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Sender is `"{from_name} <{from_address}>"`, with `from_address` defaulting to `user`.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotifyError> {
        if config.host.trim().is_empty() {
            return Err(NotifyError::ConfigError("smtp.host must be set".to_string()));
        }
        let address = config
            .from_address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| config.user.clone());
        let from = parse_mailbox(&format!("{} <{}>", config.from_name, address))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();

        Ok(Self { transport, from })
    }

    pub fn from_mailbox(&self) -> &Mailbox {
        &self.from
    }

    pub fn build_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> Result<Message, NotifyError> {
        let content_type = if is_html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };
        Ok(Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(to)?)
            .subject(subject)
            .header(content_type)
            .body(body.to_string())?)
    }

    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> Result<NotificationResult, NotifyError> {
        let message = self.build_message(to, subject, body, is_html)?;
        let response = self.transport.send(message).await?;
        info!("Email \"{}\" sent to {}", subject, to);
        Ok(NotificationResult {
            id: response.first_line().unwrap_or_default().to_string(),
            status: response.code().to_string(),
        })
    }
}
