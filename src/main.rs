//! Employee API - a small employee management REST service
//!
//! Binary entry point: owns the store's lifecycle and runs the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_api::{api::create_router, AppState, Config};

/// Main entry point for the employee API server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the database file and ensure the schema exists
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. On SIGINT/SIGTERM stop serving and close the database
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, database={}",
        config.server_port,
        config.database_path.display()
    );

    let state = AppState::from_config(&config).with_context(|| {
        format!(
            "Database initialization failed for {}",
            config.database_path.display()
        )
    })?;
    info!("Database initialized successfully");

    let app = create_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("EMS Backend server running on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET    /api/health        - Health check");
    info!("  GET    /api/employees     - Get all employees");
    info!("  GET    /api/employees/:id - Get employee by ID");
    info!("  POST   /api/employees     - Create new employee");
    info!("  PUT    /api/employees/:id - Update employee");
    info!("  DELETE /api/employees/:id - Delete employee");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // The router has been dropped, so this should be the last handle
    match Arc::try_unwrap(state.store) {
        Ok(store) => {
            store
                .into_inner()
                .close()
                .context("Failed to close database")?;
            info!("Database closed");
        }
        Err(_) => warn!("Database still in use at shutdown; dropping connection"),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }
}
