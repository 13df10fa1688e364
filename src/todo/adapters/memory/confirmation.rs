//! Clear-all confirmation adapter with a fixed decision.

use async_trait::async_trait;

use crate::todo::ports::{ClearConfirmation, ClearDecision};

/// Confirmation adapter that always returns the configured decision.
///
/// Useful for headless embedders and tests; interactive presentation
/// layers provide their own prompt-backed implementation.
#[derive(Debug, Clone, Copy)]
pub struct StaticClearConfirmation {
    decision: ClearDecision,
}

impl StaticClearConfirmation {
    /// Creates an adapter returning the given decision.
    #[must_use]
    pub const fn new(decision: ClearDecision) -> Self {
        Self { decision }
    }

    /// Creates an adapter that always confirms.
    #[must_use]
    pub const fn confirming() -> Self {
        Self::new(ClearDecision::Confirmed)
    }

    /// Creates an adapter that always cancels.
    #[must_use]
    pub const fn cancelling() -> Self {
        Self::new(ClearDecision::Cancelled)
    }
}

#[async_trait]
impl ClearConfirmation for StaticClearConfirmation {
    async fn confirm_clear(&self) -> ClearDecision {
        self.decision
    }
}
