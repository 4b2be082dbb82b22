//! Server bootstrap: wires stores, services and the router, then serves.

use std::sync::Arc;
use std::time::Duration;

use listhub_core::config::AppConfig;
use listhub_core::error::AppError;
use listhub_database::DatabasePool;
use listhub_storage::build_blob_store;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Listhub server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Listhub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    tracing::info!("Database ready");

    // ── Step 2: Initialize blob store ────────────────────────────
    tracing::info!(
        "Initializing blob store (provider: {})...",
        config.storage.provider
    );
    let blobs = build_blob_store(&config.storage).await?;
    tracing::info!("Blob store initialized");

    // ── Step 3: Initialize services ──────────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(
        config,
        Arc::new(db.users()),
        Arc::new(db.listings()),
        blobs,
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Listhub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Release connections ──────────────────────────────
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within {}s", grace.as_secs());
    }

    tracing::info!("Listhub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
