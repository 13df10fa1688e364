//! Ordered todo collection and its identifier-allocation invariants.

use super::{Todo, TodoDomainError, TodoId, TodoLabel};
use std::collections::HashSet;

/// Ordered collection of todo items.
///
/// Insertion order is preserved and there is no reordering operation.
/// Identifiers are unique within the list at all times and allocation is
/// monotonic per instance: clearing the list does not reset the allocator,
/// so identifiers are never reused within a list's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u64,
}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Reconstructs a list from persisted items, preserving their order.
    ///
    /// Identifier allocation resumes strictly above the largest restored
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DuplicateId`] when two items share an
    /// identifier.
    pub fn from_items(items: Vec<Todo>) -> Result<Self, TodoDomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(TodoDomainError::DuplicateId(item.id()));
            }
        }
        let next_id = items
            .iter()
            .map(|item| item.id().value())
            .max()
            .map_or(1, |highest| highest.saturating_add(1));
        Ok(Self { items, next_id })
    }

    /// Appends a new, not-yet-completed item and returns its identifier.
    pub fn add(&mut self, label: TodoLabel) -> TodoId {
        let id = self.allocate_id();
        self.items.push(Todo::new(id, label));
        id
    }

    /// Marks the matching item as completed.
    ///
    /// Returns whether a matching item existed; an absent identifier is a
    /// no-op. Idempotent for already-completed items.
    pub fn complete(&mut self, id: TodoId) -> bool {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .map_or(false, |item| {
                item.complete();
                true
            })
    }

    /// Removes the matching item, preserving the order of the rest.
    ///
    /// Returns whether a matching item existed; an absent identifier is a
    /// no-op.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() < len_before
    }

    /// Removes every item. Identifier allocation does not reset.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = TodoId::from_value(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
