use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use litter_check_service::{
    app::{router, AppState},
    config::Config,
    models::LocationRegistry,
    services::gemini::GeminiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "litter_check_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    let gemini = GeminiClient::new(&config).context("Failed to initialize Gemini client")?;
    info!("Using inference model {}", gemini.model());

    let registry = LocationRegistry::default();
    info!("Geofencing {} registered beach(es)", registry.len());

    let state = Arc::new(AppState::new(registry, Arc::new(gemini)));
    let app = router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Servidor Online na porta {}", config.port);

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    info!("Shutting down...");
    Ok(())
}
