//! To-do list state management and snapshot persistence.
//!
//! This module implements the invariant-bearing core of the to-do list
//! application: an ordered in-memory collection of tasks mutated by user
//! intents (add, complete, delete, clear-all) and persisted after every
//! mutation as a single serialized snapshot. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
