use std::sync::Arc;

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marker_service::{
    config::Config,
    handlers,
    services::{ItemsApi, MapScreen, StaticLocationProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marker_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting marker service");

    let api = ItemsApi::new(&config.api_base_url, &config.user_agent)
        .context("Failed to initialize items API client")?;
    let provider =
        StaticLocationProvider::new(config.device_location(), config.location_permission());

    // One screen load per process
    let screen = Arc::new(MapScreen::start(api, provider));

    let app = handlers::router(screen)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("Invalid listen address")?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    info!("Shutting down...");
    Ok(())
}
