//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut settings: Settings) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    if settings.security.using_dev_secret {
        tracing::warn!("SECRET_KEY not set, using the development secret (DEBUG mode only)");
    }
    if !settings.paths.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %settings.paths.static_dir.display(),
            "Static directory not found, /static will return 404"
        );
    }

    let addr = settings.server_addr();
    let api_prefix = settings.server.api_prefix.clone();

    // Create application state with the production services
    let app_state = AppState::from_settings(settings)?;

    // Build router
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("API available under http://{}{}", addr, api_prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

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
