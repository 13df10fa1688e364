//! Error types for todo domain validation.

use super::TodoId;
use thiserror::Error;

/// Errors returned while constructing or hydrating domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo label is empty after trimming.
    #[error("todo label must not be empty")]
    EmptyLabel,

    /// Two items in a hydrated snapshot share an identifier.
    #[error("duplicate todo identifier: {0}")]
    DuplicateId(TodoId),
}
