//! The two request handlers plus the health probe.
//!
//! Each handler validates its input, performs at most one external call and
//! maps every failure into the JSON error envelope via [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::core::models::{
    EmailRequest, EmailResponse, OutgoingEmail, SummarizeRequest, SummarizeResponse,
};
use crate::errors::ApiError;
use crate::markdown;
use crate::prompt;

use super::AppState;

/// Subject used when the caller supplies none.
const DEFAULT_SUBJECT: &str = "Meeting Summary";

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// `POST /summarize` - one chat-completion call, no retries.
#[tracing::instrument(level = "info", skip_all)]
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    if request.transcript.trim().is_empty() {
        return Err(ApiError::Validation("Transcript is required.".to_string()));
    }

    let instruction = prompt::effective_instruction(request.instruction.as_deref());

    info!(
        transcript_chars = request.transcript.len(),
        provider = state.config.provider.as_str(),
        "Summarize request accepted"
    );

    let summary = state
        .llm
        .generate_summary(instruction, &request.transcript)
        .await
        .map_err(|e| {
            error!("Summarization failed: {e}");
            e
        })?;

    Ok(Json(SummarizeResponse { summary }))
}

/// `POST /email` - one SMTP send, no retries.
#[tracing::instrument(level = "info", skip_all)]
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    if request.recipients.is_empty() {
        return Err(ApiError::Validation(
            "At least one recipient is required.".to_string(),
        ));
    }

    if !state.config.smtp.is_configured() {
        return Err(ApiError::Configuration(
            "SMTP not configured on server.".to_string(),
        ));
    }

    let subject = request
        .subject
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

    let email = OutgoingEmail {
        from: state.config.smtp.from_address.clone(),
        to: request.recipients,
        subject,
        html: markdown::render(&request.body),
        text: request.body,
    };

    info!(recipients = email.to.len(), "Email request accepted");

    let info = state.mailer.send(&email).await.map_err(|e| {
        error!("Email send failed: {e}");
        e
    })?;

    Ok(Json(EmailResponse { ok: true, info }))
}
