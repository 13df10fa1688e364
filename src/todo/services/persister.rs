//! Single-slot snapshot write queue.

use crate::todo::{domain::Todo, ports::SnapshotStore};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
struct PendingSnapshot {
    generation: u64,
    todos: Vec<Todo>,
}

/// Latest-wins asynchronous snapshot writer.
///
/// Mutators enqueue the full post-mutation snapshot; a background writer
/// drains a latest-value channel, so at most one write is in flight and a
/// burst of mutations collapses to the newest snapshot. Intermediate
/// snapshots may therefore never reach storage. Write failures are logged
/// and never surfaced: there is no retry and no durability guarantee.
///
/// Dropping the persister closes the queue; the writer finishes any
/// snapshot enqueued before the drop, then exits.
#[derive(Debug)]
pub struct SnapshotPersister {
    queue: watch::Sender<PendingSnapshot>,
    persisted: watch::Receiver<u64>,
    enqueued: u64,
}

impl SnapshotPersister {
    /// Spawns the background writer on the current tokio runtime.
    #[must_use]
    pub fn spawn<S>(store: Arc<S>) -> Self
    where
        S: SnapshotStore + 'static,
    {
        let (queue, mut queue_rx) = watch::channel(PendingSnapshot::default());
        let (persisted_tx, persisted) = watch::channel(0_u64);
        drop(tokio::spawn(async move {
            while queue_rx.changed().await.is_ok() {
                let snapshot = queue_rx.borrow_and_update().clone();
                if let Err(error) = store.save(&snapshot.todos).await {
                    tracing::warn!(
                        generation = snapshot.generation,
                        %error,
                        "failed to persist snapshot"
                    );
                }
                persisted_tx.send_replace(snapshot.generation);
            }
        }));
        Self {
            queue,
            persisted,
            enqueued: 0,
        }
    }

    /// Enqueues a snapshot, superseding any not-yet-written predecessor,
    /// and returns its generation.
    pub fn enqueue(&mut self, todos: Vec<Todo>) -> u64 {
        self.enqueued = self.enqueued.saturating_add(1);
        let generation = self.enqueued;
        self.queue
            .send_replace(PendingSnapshot { generation, todos });
        generation
    }

    /// Returns the generation of the most recently enqueued snapshot.
    ///
    /// Zero when nothing has been enqueued yet.
    #[must_use]
    pub const fn enqueued_generation(&self) -> u64 {
        self.enqueued
    }

    /// Returns the highest generation whose write has been attempted.
    #[must_use]
    pub fn persisted_generation(&self) -> u64 {
        *self.persisted.borrow()
    }

    /// Waits until the write of the given generation has been attempted.
    ///
    /// Returns immediately for generations already attempted, including
    /// generations superseded by a newer snapshot before reaching storage.
    pub async fn wait_for_persisted(&self, generation: u64) {
        let mut persisted = self.persisted.clone();
        while *persisted.borrow_and_update() < generation {
            if persisted.changed().await.is_err() {
                return;
            }
        }
    }
}
