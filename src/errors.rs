use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can surface, with a fixed status/message mapping.
///
/// Handlers never let anything else escape: each variant renders as the
/// JSON envelope `{"error": <message>}` with the status from [`status`].
///
/// [`status`]: ApiError::status
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing required input (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Server-side configuration missing for the requested operation.
    #[error("{0}")]
    Configuration(String),

    /// The AI provider answered with a non-success HTTP status.
    #[error("AI API error: {0}")]
    Upstream(u16),

    /// SMTP transport construction or send failed.
    #[error("{0}")]
    Delivery(String),

    /// Anything else: network failure, malformed upstream response.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_)
            | ApiError::Upstream(_)
            | ApiError::Delivery(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for ApiError {
    fn from(error: lettre::transport::smtp::Error) -> Self {
        ApiError::Delivery(error.to_string())
    }
}

impl From<lettre::error::Error> for ApiError {
    fn from(error: lettre::error::Error) -> Self {
        ApiError::Delivery(error.to_string())
    }
}

impl From<lettre::address::AddressError> for ApiError {
    fn from(error: lettre::address::AddressError) -> Self {
        ApiError::Delivery(error.to_string())
    }
}
