//! Identifier types for the todo domain.

use std::fmt;

/// Unique identifier for a todo item.
///
/// Identifiers are unique within a list, allocated monotonically per list
/// instance, and never reused for the lifetime of the list. They need not
/// be sequential across hydration boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a todo identifier from an existing numeric value.
    #[must_use]
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
