//! # Commands
//!
//! Transport-free operations behind the HTTP routes.
//!
//! ```text
//! routes.rs (axum)            commands (this module)          crates
//! ────────────────            ──────────────────────          ──────
//! POST /receipts/process ───► process_receipt(store, body) ─► validate, score, put
//! GET  /receipts/:id/points ► get_points(store, id) ───────► get
//! ```
//!
//! Handlers only extract inputs and encode outputs; everything that can be
//! tested without a server lives here.

pub mod receipts;

pub use receipts::{get_points, process_receipt, PointsResponse, ProcessReceiptResponse};
