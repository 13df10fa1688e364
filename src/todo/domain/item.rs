//! Todo item type and its completion transition.

use super::{TodoId, TodoLabel};

/// A single to-do entry.
///
/// The identifier is immutable, the label is set once at creation, and the
/// completion flag transitions `false` to `true` only; there is no
/// un-complete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    label: TodoLabel,
    completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo item.
    #[must_use]
    pub const fn new(id: TodoId, label: TodoLabel) -> Self {
        Self {
            id,
            label,
            completed: false,
        }
    }

    /// Reconstructs a todo item from persisted storage.
    #[must_use]
    pub const fn from_parts(id: TodoId, label: TodoLabel, completed: bool) -> Self {
        Self {
            id,
            label,
            completed,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the item label.
    #[must_use]
    pub const fn label(&self) -> &TodoLabel {
        &self.label
    }

    /// Returns whether the item has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the item as completed. Idempotent.
    pub const fn complete(&mut self) {
        self.completed = true;
    }
}
