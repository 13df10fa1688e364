//! Snapshot store port for whole-list persistence.

use crate::todo::domain::Todo;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Whole-list persistence contract.
///
/// The list is stored as a single serialized snapshot: every save rewrites
/// the entire collection and there are no partial updates. Implementations
/// are internally synchronized so a background writer may share them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has ever been saved.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Corrupt`] when a snapshot exists but
    /// cannot be decoded, or [`SnapshotStoreError::Io`] when the underlying
    /// storage fails.
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<Todo>>>;

    /// Overwrites the persisted snapshot with the given items, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the underlying storage
    /// rejects the write.
    async fn save(&self, todos: &[Todo]) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// A snapshot exists but does not decode to a valid list.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage-layer error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
