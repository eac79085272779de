//! Router configuration for the web server.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::{handlers, AppState};

/// Create the main router with all routes.
///
/// Cross-origin requests are allowed from any origin; the front-end is
/// served elsewhere.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/email", post(handlers::send_email))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
