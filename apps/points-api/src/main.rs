//! # Receipt Points API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Server Startup                                    │
//! │                                                                         │
//! │  1. init_tracing()        RUST_LOG or "info"                           │
//! │  2. ApiConfig::load()     POINTS_* environment variables               │
//! │  3. ReceiptStore::new()   empty, lives until process exit              │
//! │  4. axum::serve           until Ctrl+C / SIGTERM                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::{error, info};

use points_api::{init_tracing, router, ApiConfig, AppState};
use points_store::ReceiptStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting receipt points server...");

    let config = ApiConfig::load()?;
    let addr = config.socket_addr();
    info!(
        %addr,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let state = AppState::new(ReceiptStore::new(), config);
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
