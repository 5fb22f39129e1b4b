//! # Receipt Store
//!
//! Identifier → points map shared across request handlers.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Access Pattern                                 │
//! │                                                                         │
//! │  Request 1 ── put(94)  ──► write lock ── insert ── unlock              │
//! │  Request 2 ── get(id)  ──► read lock ─── lookup ── unlock              │
//! │  Request 3 ── get(id)  ──► read lock ─── lookup ── unlock  (parallel)  │
//! │                                                                         │
//! │  Each record is one `insert` under the write lock, so a reader sees    │
//! │  either the whole record or nothing.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use points_core::{Points, ReceiptId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Shared, clonable handle to the result store.
///
/// Clones share the same underlying map. Records are never updated or
/// removed; the map lives as long as the last handle.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    records: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `points` under a freshly generated id and returns the id.
    ///
    /// Never fails. If a generated id is already taken (vanishingly
    /// unlikely with UUID v4) a new one is drawn, so ids are never reused.
    pub fn put(&self, points: Points) -> ReceiptId {
        let mut records = self.write();

        let mut id = ReceiptId::generate();
        while records.contains_key(&id) {
            id = ReceiptId::generate();
        }

        records.insert(id.clone(), points);
        debug!(%id, points, "score stored");
        id
    }

    /// Returns the points stored under `id`.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`] if no record exists for `id`.
    pub fn get(&self, id: &str) -> StoreResult<Points> {
        self.read()
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Inserts are single calls, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Points>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Points>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
