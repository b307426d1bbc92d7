//! pool-registry-gateway server entry point.
//!
//! Starts the Axum HTTP server with the pool REST endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pool_registry_gateway::api;
use pool_registry_gateway::app_state::AppState;
use pool_registry_gateway::config::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        max_pool_size = config.max_pool_size,
        open_catalog = config.type_catalog.is_open(),
        "starting pool-registry-gateway"
    );

    // Build domain and service layers around an empty registry
    let app_state = AppState::from_config(&config);

    // Build router
    let app = api::with_middleware(api::build_router().with_state(app_state));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
