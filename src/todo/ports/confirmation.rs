//! Confirmation port for the destructive clear-all operation.
//!
//! Clearing the whole list requires an explicit two-choice prompt. The
//! presentation layer owns the prompt itself; this port is the seam the
//! service consults before touching state.

use async_trait::async_trait;

/// Outcome of the two-choice clear-all prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearDecision {
    /// The user confirmed; every item may be removed.
    Confirmed,
    /// The user cancelled; state must be left unchanged.
    Cancelled,
}

/// Port for obtaining the user's clear-all decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClearConfirmation: Send + Sync {
    /// Prompts for confirmation before clearing the list.
    async fn confirm_clear(&self) -> ClearDecision;
}
