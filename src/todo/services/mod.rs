//! Service layer for to-do list sessions.
//!
//! Services own the in-memory list state, apply user intents, and schedule
//! asynchronous snapshot persistence through the ports.

pub mod list;
pub mod persister;

pub use list::{ClearOutcome, TodoListService};
pub use persister::SnapshotPersister;
