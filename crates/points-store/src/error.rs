//! # Store Error Types

use thiserror::Error;

/// Result store errors.
///
/// `put` cannot fail, so the only way a store operation goes wrong is a
/// lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No score is stored under this id.
    ///
    /// ## When This Occurs
    /// - The id was never issued by this process
    /// - The process restarted since the id was issued
    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
