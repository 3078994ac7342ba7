use cuit_lookup_gateway::config::Config;
use cuit_lookup_gateway::handlers::AppState;
use cuit_lookup_gateway::routes;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, builds the router and serves it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cuit_lookup_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    if config.tusfacturas.is_some() {
        tracing::info!("✓ TusFacturasAPP credentials configured");
    } else {
        tracing::warn!("TusFacturasAPP credentials missing; fuente=tusfacturas lookups will fail");
    }

    let port = config.port;
    let app_state = Arc::new(AppState::new(config));
    let app = routes::router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Servidor en http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
