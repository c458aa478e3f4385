mod config;
mod errors;
mod ghl_client;
mod handlers;
mod intake;
mod lead_handler;
mod models;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::ghl_client::GhlClient;
use crate::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes logging and tracing, loads configuration, builds the GHL
/// client, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "annuityhelp_lead_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let ghl = GhlClient::new(&config);
    tracing::info!("✓ GHL client initialized: {}", config.ghl_base_url);

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        ghl,
    });

    let app = handlers::router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
