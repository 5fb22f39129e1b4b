//! # Application State
//!
//! Shared state handed to every axum handler.
//!
//! ```text
//! main()
//!   │  ApiConfig::load()
//!   │  ReceiptStore::new()
//!   ▼
//! AppState { store, config } ──clone per request──► handlers
//! ```
//!
//! `ReceiptStore` is already a cheap `Arc` handle and the config is
//! read-only after startup, so cloning the state is cheap.

use std::sync::Arc;

use points_store::ReceiptStore;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ReceiptStore,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates state from a store and loaded configuration.
    pub fn new(store: ReceiptStore, config: ApiConfig) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(ReceiptStore::new(), ApiConfig::default())
    }
}
