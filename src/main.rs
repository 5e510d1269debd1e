//! Student Records - a RESTful student records service
//!
//! Binary entry point: wires configuration, the document store and the HTTP
//! router together.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_records::{
    api::create_router,
    spawn_connectivity_check,
    store::{MemoryStore, MongoStore, StudentStore},
    AppState, Config,
};

/// Main entry point for the student records server.
///
/// # Startup Sequence
/// 1. Load a `.env` file if present
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables
/// 4. Create the document store handle
/// 5. Check store connectivity in the background
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM, then close the store
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_records=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student Records Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, database={}, collection={}, locale={}",
        config.server_port, config.database_name, config.collection_name, config.locale
    );

    let store = open_store(&config).await?;
    info!(backend = store.backend(), "Student store initialized");

    let connectivity_handle = spawn_connectivity_check(store.clone());

    let state = AppState::from_config(&config, store.clone());
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(connectivity_handle))
        .await
        .context("server error")?;

    store.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Builds the store selected by `DATABASE_URL`.
///
/// Only a malformed URI is fatal; an unreachable server is reported by the
/// connectivity check.
async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn StudentStore>> {
    if config.uses_memory_store() {
        warn!("Using the in-memory store; records are lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = MongoStore::connect(
        &config.database_url,
        &config.database_name,
        &config.collection_name,
    )
    .await
    .context("invalid DATABASE_URL")?;
    Ok(Arc::new(store))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the connectivity check if it is still pending.
async fn shutdown_signal(connectivity_handle: tokio::task::JoinHandle<bool>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if !connectivity_handle.is_finished() {
        connectivity_handle.abort();
        warn!("Connectivity check aborted");
    }
}
