//! Todo Core - in-memory todo list service.
//!
//! Lets clients list, create and delete todo items over HTTP. State lives
//! only in memory for the lifetime of the process.

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod error;
mod logging;
mod resource;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::resource::TodoResourceHandler;
use crate::storage::TodoStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resource handler over the shared todo store.
    pub resource: TodoResourceHandler,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting Todo Core v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        cors_origins = config.cors.allowed_origins.len(),
        "Configuration loaded"
    );

    // Build application state
    let state = AppState {
        resource: TodoResourceHandler::new(TodoStore::new()),
    };

    // Build router
    let app = build_router(state, &config.cors);

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
