//! Local-disk adapter for snapshot persistence.

mod store;

pub use store::FileSnapshotStore;
