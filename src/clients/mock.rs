//! Recording mailer for tests: no network, remembers every send.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::models::{DeliveryReceipt, OutgoingEmail};
use crate::errors::ApiError;

use super::mailer::Mailer;

/// [`Mailer`] that records outgoing messages instead of sending them.
#[derive(Debug, Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
}

impl MockMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with the given message.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    /// Snapshot of everything sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mock mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, ApiError> {
        if let Some(message) = &self.fail_with {
            return Err(ApiError::Delivery(message.clone()));
        }

        self.sent.lock().expect("mock mailer lock").push(email.clone());

        Ok(DeliveryReceipt {
            code: "250".to_string(),
            message: "OK".to_string(),
            recipients: email.to.clone(),
        })
    }
}
