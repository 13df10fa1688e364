//! JSON file-backed snapshot store.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::todo::{
    adapters::models,
    domain::Todo,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// File name of the snapshot inside the storage directory.
///
/// The on-disk rendering of the fixed storage key `todos`.
const SNAPSHOT_FILE: &str = "todos.json";

/// Extension used for the in-flight temporary file.
const TEMP_EXTENSION: &str = "json.tmp";

/// Snapshot store backed by a JSON file on local disk.
///
/// Saves write a temporary file in the same directory and rename it over
/// the snapshot, so a crash mid-write never corrupts the previous
/// snapshot.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Opens a store inside the given directory, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the directory cannot be
    /// created.
    pub async fn create(dir: impl Into<PathBuf>) -> SnapshotStoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(SnapshotStoreError::io)?;
        Ok(Self {
            path: dir.join(SNAPSHOT_FILE),
        })
    }

    /// Opens a store at the platform's per-user data directory.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the platform data directory
    /// cannot be determined or created.
    pub async fn create_default() -> SnapshotStoreResult<Self> {
        Self::create(default_storage_dir()?).await
    }

    /// Returns the path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_storage_dir() -> SnapshotStoreResult<PathBuf> {
    directories::ProjectDirs::from("", "", "jotter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            SnapshotStoreError::io(std::io::Error::other(
                "could not determine platform data directory",
            ))
        })
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<Vec<Todo>>> {
        match fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(models::decode(&blob)?)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SnapshotStoreError::io(error)),
        }
    }

    async fn save(&self, todos: &[Todo]) -> SnapshotStoreResult<()> {
        let blob = models::encode(todos)?;
        let tmp_path = self.path.with_extension(TEMP_EXTENSION);
        fs::write(&tmp_path, blob)
            .await
            .map_err(SnapshotStoreError::io)?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(SnapshotStoreError::io)
    }
}
