//! Recap - a backend that turns raw meeting transcripts into structured
//! summaries and mails them out.
//!
//! The service exposes two stateless JSON handlers:
//! 1. `POST /summarize` forwards a transcript (plus an optional instruction)
//!    to an OpenAI-compatible chat-completion endpoint and returns the
//!    generated summary.
//! 2. `POST /email` renders a Markdown body to HTML and sends one message
//!    over SMTP to the given recipients.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface (permissive CORS, `/api` prefix rewriting
//!   for path-prefixing hosts)
//! - reqwest for the chat-completion call
//! - lettre for SMTP delivery
//! - pulldown-cmark for the HTML part of outgoing mail
//! - Tokio for the async runtime
//!
//! Configuration is resolved once at startup ([`crate::core::config::AppConfig`])
//! and shared read-only with both handlers; there is no other shared state.

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod markdown;
pub mod prompt;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an env-filter (`RUST_LOG`, defaulting to
/// `info`). Call once at the start of the binary before serving requests.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
