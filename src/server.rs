//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, service and router, then drives the Axum server
//! until a shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::Registry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory shortcode registry
/// - Link service with the configured defaults
/// - Axum HTTP server with peer address tracking
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(Registry::new(config.registry_config()));
    tracing::info!(
        "Registry ready (code length {}, {} attempts)",
        config.code_length,
        config.code_max_attempts
    );

    let link_service = Arc::new(LinkService::new(
        registry,
        config.default_validity_minutes,
        config.bulk_limit,
    ));

    let state = AppState::new(link_service, config.base_url.clone());

    let app = app_router(state, &config.cors_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
