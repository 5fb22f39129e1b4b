//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── CoreError        - Submission failures (decode, validate, encode) │
//! │  └── ValidationError  - First violated structural rule                 │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError       - Lookup misses                                  │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError         - What the client sees (generic, serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The detail carried here is for logs only. Clients get a generic
//! message from the API layer.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures while turning a submission into a stored score.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The body could not be decoded into a receipt at all.
    ///
    /// ## When This Occurs
    /// - Empty body
    /// - Truncated or otherwise broken JSON
    /// - A field with the wrong JSON type (e.g. `"retailer": 5`)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The receipt decoded but failed structural validation.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] ValidationError),

    /// The computed result could not be serialized for the response.
    #[error("Encoding failure: {0}")]
    EncodingFailure(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::MalformedInput(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural validation errors.
///
/// Only the first violated rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required receipt field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The receipt has no items.
    #[error("receipt must contain at least one item")]
    NoItems,

    /// A required item field is missing or empty.
    #[error("item {index}: {field} is required")]
    ItemFieldRequired { index: usize, field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
