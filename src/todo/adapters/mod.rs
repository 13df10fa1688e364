//! Adapter implementations of the todo ports.
//!
//! - [`memory`]: in-memory adapters for tests and ephemeral sessions
//! - [`fs`]: local-disk snapshot persistence
//! - [`models`]: the shared wire model both snapshot stores serialize

pub mod fs;
pub mod memory;
pub mod models;
