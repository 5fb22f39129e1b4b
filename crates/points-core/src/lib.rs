//! # points-core: Pure Receipt Rules
//!
//! Receipt types, structural validation and the points scoring engine.
//! Nothing in here touches the network, the clock or shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (axum)                            │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │validation │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │  parsing  │  │ required  │  │  8 rules  │  │   │
//! │  │   │   Item    │  │  rounding │  │  fields   │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                points-store (id → points)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item and ReceiptId
//! - [`amount`] - Decimal text amounts and the arithmetic the rules need
//! - [`validation`] - Structural checks run before scoring
//! - [`scoring`] - The eight additive points rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score_receipt, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "13:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![
//!         Item::new("Gatorade", "2.25"),
//!         Item::new("Gatorade", "2.25"),
//!     ],
//! };
//!
//! validate_receipt(&receipt).unwrap();
//! assert_eq!(score_receipt(&receipt), 94);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use scoring::{score_breakdown, score_receipt, ScoreBreakdown};
pub use types::{Item, Points, Receipt, ReceiptId};
pub use validation::validate_receipt;
