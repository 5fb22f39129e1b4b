//! # Receipt Points API
//!
//! HTTP front end for the receipt points service.
//!
//! ## Module Organization
//! ```text
//! points_api/
//! ├── lib.rs          ◄─── You are here (exports + logging setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── state.rs        ◄─── Shared AppState (store + config)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── receipts.rs ◄─── process_receipt, get_points
//! ├── routes.rs       ◄─── axum router and handlers
//! └── error.rs        ◄─── ApiError returned to clients
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `POINTS_HOST` - bind address (default: 0.0.0.0)
//! - `POINTS_PORT` - HTTP port (default: 9080)
//! - `POINTS_MAX_BODY_BYTES` - request body cap (default: 1 MiB)
//! - `RUST_LOG` - tracing filter (default: info)

pub mod commands;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ErrorCode};
pub use routes::router;
pub use state::AppState;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,points_api=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
