//! In-memory snapshot store.
//!
//! Holds the serialized blob behind a lock, so the wire codec is exercised
//! exactly as it is for the on-disk adapter. Non-persistent.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    adapters::models,
    domain::Todo,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    blob: Arc<RwLock<Option<String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a raw serialized blob.
    ///
    /// The blob is not validated; tests use this to inject corrupt
    /// payloads.
    #[must_use]
    pub fn from_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(RwLock::new(Some(blob.into()))),
        }
    }

    /// Returns the raw serialized blob, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the lock is poisoned.
    pub fn blob(&self) -> SnapshotStoreResult<Option<String>> {
        let blob = self
            .blob
            .read()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(blob.clone())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<Todo>>> {
        let blob = self.blob()?;
        match blob {
            Some(raw) => Ok(Some(models::decode(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, todos: &[Todo]) -> SnapshotStoreResult<()> {
        let encoded = models::encode(todos)?;
        let mut blob = self
            .blob
            .write()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        *blob = Some(encoded);
        Ok(())
    }
}
