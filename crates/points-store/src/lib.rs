//! # points-store: Result Store for Receipt Points
//!
//! An in-memory map from receipt id to computed points, shared by every
//! request the service handles.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  process_receipt ──► score ──► store.put(points) ──► ReceiptId         │
//! │                                                                         │
//! │  get_points(id) ─────────────► store.get(id) ──────► points / NotFound │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  points-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ReceiptStore (Clone handle)                                   │   │
//! │  │     └── Arc<RwLock<HashMap<ReceiptId, Points>>>                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use points_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! let id = store.put(94);
//! assert_eq!(store.get(id.as_str()).unwrap(), 94);
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::ReceiptStore;
