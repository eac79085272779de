//! Chat-completion API client.
//!
//! Speaks the OpenAI-compatible wire format, so the same client serves both
//! providers; only key, model and endpoint differ.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ApiError;
use crate::prompt;

/// Fixed sampling temperature for summaries.
const TEMPERATURE: f32 = 0.2;
/// Cap on the generated summary length, in tokens.
const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatMessage,
}

/// Client for the configured chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    endpoint_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(endpoint_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint_url,
            api_key,
            model,
        }
    }

    /// Generate a summary with exactly one upstream call.
    ///
    /// Returns the first choice's message content, or the empty string when
    /// the response carries no choices or no content.
    ///
    /// # Errors
    ///
    /// `Upstream` when the endpoint answers with a non-success status,
    /// `Internal` when the request cannot be sent or the body cannot be
    /// parsed. Failures are never retried.
    pub async fn generate_summary(
        &self,
        instruction: &str,
        transcript: &str,
    ) -> Result<String, ApiError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::build_user_message(instruction, transcript),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        info!(model = %self.model, "Calling chat completion endpoint");

        let response = self
            .client
            .post(&self.endpoint_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Upstream(response.status().as_u16()));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to parse AI response: {e}")))?;

        let summary = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        info!(chars = summary.len(), "Chat completion succeeded");

        Ok(summary)
    }
}
