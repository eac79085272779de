//! HTTP surface: state, routes, handlers and the serverless path shim.

mod handlers;
mod routes;
pub mod rewrite;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use axum::ServiceExt;
use tower::Layer;

use crate::clients::{LlmClient, Mailer, SmtpMailer};
use crate::core::config::AppConfig;

/// Shared state for the web server: the configuration snapshot and the two
/// outbound clients. Everything here is read-only per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub llm: LlmClient,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let llm = LlmClient::new(
            config.endpoint_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
        );
        let mailer = Arc::new(SmtpMailer::new(config.smtp.clone()));

        Self {
            config: Arc::new(config),
            llm,
            mailer,
        }
    }
}

/// Start the web server.
///
/// The prefix-rewrite middleware wraps the router itself so rewritten paths
/// are what routing sees.
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(state);
    let app = middleware::from_fn(rewrite::rewrite_request_path).layer(router);

    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::into_make_service(app)).await?;

    Ok(())
}
