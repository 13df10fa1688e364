//! Jotter: local-first to-do list core.
//!
//! This crate provides the state-management and persistence core of a
//! single-screen to-do list application: an ordered in-memory collection of
//! short text tasks with add/complete/delete/clear operations, persisted
//! locally as a single serialized snapshot.
//!
//! # Architecture
//!
//! Jotter follows hexagonal architecture principles:
//!
//! - **Domain**: Pure list-state logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and user confirmation
//! - **Adapters**: Concrete implementations of ports (in-memory, local disk)
//!
//! The visual presentation layer is deliberately absent: it is an external
//! collaborator that renders the exposed state and forwards user intents
//! into the service layer.
//!
//! # Modules
//!
//! - [`todo`]: List state management and snapshot persistence

pub mod todo;
