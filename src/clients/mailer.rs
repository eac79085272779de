//! SMTP delivery.
//!
//! The transport is built fresh for every send from the configured
//! host/port/credentials; nothing is pooled across requests.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::core::config::SmtpConfig;
use crate::core::models::{DeliveryReceipt, OutgoingEmail};
use crate::errors::ApiError;

/// Implicit-TLS (SMTPS) port. Every other port gets opportunistic STARTTLS.
const SMTPS_PORT: u16 = 465;

/// Sends one email message and reports what the transport returned.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, ApiError>;
}

/// [`Mailer`] backed by a lettre SMTP transport.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    #[must_use]
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, ApiError> {
        let tls_params = TlsParameters::new(self.config.host.clone())?;
        let tls = if self.config.port == SMTPS_PORT {
            Tls::Wrapper(tls_params)
        } else {
            Tls::Opportunistic(tls_params)
        };

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .port(self.config.port)
                .tls(tls)
                .credentials(Credentials::new(
                    self.config.user.clone(),
                    self.config.password.clone(),
                ))
                .build(),
        )
    }

    /// Assemble the MIME message: one To header with all recipients in
    /// caller order, the verbatim text part and the rendered HTML part as
    /// `multipart/alternative`.
    pub fn build_message(email: &OutgoingEmail) -> Result<Message, ApiError> {
        let mut builder = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .subject(&email.subject);

        for recipient in &email.to {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, ApiError> {
        let message = Self::build_message(email)?;
        let transport = self.transport()?;

        info!(
            host = %self.config.host,
            port = self.config.port,
            recipients = email.to.len(),
            "Sending email"
        );

        let response = transport.send(message).await?;

        Ok(DeliveryReceipt {
            code: response.code().to_string(),
            message: response.message().collect::<Vec<_>>().join(" "),
            recipients: email.to.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_email() -> OutgoingEmail {
        OutgoingEmail {
            from: "no-reply@example.com".to_string(),
            to: vec!["a@x.com".to_string(), "b@x.com".to_string()],
            subject: "Meeting Summary".to_string(),
            text: "**done**".to_string(),
            html: "<p><strong>done</strong></p>\n".to_string(),
        }
    }

    #[test]
    fn message_keeps_recipient_order_on_one_to_header() {
        let message = SmtpMailer::build_message(&sample_email()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(
            formatted.contains("To: a@x.com, b@x.com"),
            "recipients should share one To header in input order:\n{formatted}"
        );
        assert!(formatted.contains("Subject: Meeting Summary"));
    }

    #[test]
    fn message_carries_both_text_and_html_parts() {
        let message = SmtpMailer::build_message(&sample_email()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("**done**"));
        assert!(formatted.contains("<p><strong>done</strong></p>"));
    }

    #[test]
    fn invalid_recipient_is_a_delivery_error() {
        let mut email = sample_email();
        email.to = vec!["not an address".to_string()];

        let err = SmtpMailer::build_message(&email).unwrap_err();
        assert!(matches!(err, ApiError::Delivery(_)));
    }
}
