//! Wire model for persisted snapshots.
//!
//! These types fix the serialized shape of the stored list. They serve as
//! the boundary between storage and domain layers: the field names below
//! are the stable wire format, and any change to them is a breaking change
//! with no migration path (the snapshot carries no schema version field).

use crate::todo::domain::{Todo, TodoId, TodoLabel};
use crate::todo::ports::{SnapshotStoreError, SnapshotStoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Persisted representation of a single todo entry.
///
/// Serializes as `{"id": <number>, "task": <string>, "completed": <bool>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTodo {
    /// Numeric item identifier.
    pub id: u64,
    /// Item label text.
    pub task: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<&Todo> for StoredTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().value(),
            task: todo.label().as_str().to_owned(),
            completed: todo.is_completed(),
        }
    }
}

/// Serializes the items, in order, to the snapshot wire format.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Io`] when serialization fails.
pub fn encode(todos: &[Todo]) -> SnapshotStoreResult<String> {
    let stored: Vec<StoredTodo> = todos.iter().map(StoredTodo::from).collect();
    serde_json::to_string(&stored).map_err(SnapshotStoreError::io)
}

/// Decodes a snapshot blob back into domain items, preserving order.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Corrupt`] when the blob is not valid JSON
/// of the expected shape, contains an empty label, or contains duplicate
/// identifiers.
pub fn decode(blob: &str) -> SnapshotStoreResult<Vec<Todo>> {
    let stored: Vec<StoredTodo> = serde_json::from_str(blob)
        .map_err(|error| SnapshotStoreError::Corrupt(error.to_string()))?;

    let mut seen = HashSet::with_capacity(stored.len());
    let mut todos = Vec::with_capacity(stored.len());
    for record in stored {
        let id = TodoId::from_value(record.id);
        if !seen.insert(id) {
            return Err(SnapshotStoreError::Corrupt(format!(
                "duplicate todo identifier {id}"
            )));
        }
        let label = TodoLabel::new(record.task)
            .map_err(|error| SnapshotStoreError::Corrupt(error.to_string()))?;
        todos.push(Todo::from_parts(id, label, record.completed));
    }
    Ok(todos)
}
