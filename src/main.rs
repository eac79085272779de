use std::env;
use std::net::SocketAddr;

use recap::api::AppState;
use recap::core::config::AppConfig;
use tracing::info;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    recap::setup_logging();

    let config = AppConfig::from_env();
    info!(
        provider = config.provider.as_str(),
        model = %config.model,
        "Configuration loaded"
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    recap::api::serve(AppState::new(config), addr).await
}
