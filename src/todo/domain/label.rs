//! Validated label type for todo items.

use super::TodoDomainError;
use std::fmt;

/// Non-empty text label of a todo item.
///
/// Labels are set once at creation; no edit operation exists. Surrounding
/// whitespace is trimmed during construction, so the stored value is the
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoLabel(String);

impl TodoLabel {
    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyLabel`] if the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
