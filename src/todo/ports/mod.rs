//! Port contracts for to-do list persistence and user confirmation.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod confirmation;
pub mod store;

pub use confirmation::{ClearConfirmation, ClearDecision};
pub use store::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
