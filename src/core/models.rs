use serde::{Deserialize, Serialize};

/// Body of `POST /summarize`.
///
/// A missing `transcript` deserializes to the empty string; validation
/// treats absent and blank the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Body of `POST /email`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailResponse {
    pub ok: bool,
    pub info: DeliveryReceipt,
}

/// One message as handed to the mailer: recipients in caller order, the
/// body both verbatim (plain part) and rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// What the SMTP transport reported for a completed send.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    /// SMTP reply code, e.g. "250".
    pub code: String,
    /// SMTP reply text.
    pub message: String,
    /// Envelope recipients the message was addressed to.
    pub recipients: Vec<String>,
}
