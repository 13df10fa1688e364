//! Service layer that owns session list state and schedules persistence.

use crate::todo::{
    domain::{Todo, TodoDomainError, TodoId, TodoLabel, TodoList},
    ports::{ClearConfirmation, ClearDecision, SnapshotStore},
    services::persister::SnapshotPersister,
};
use std::sync::Arc;

/// Outcome of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The user confirmed and every item was removed.
    Cleared,
    /// The user cancelled and state was left unchanged.
    Cancelled,
}

/// Session source of truth for the to-do list.
///
/// Owns the in-memory [`TodoList`], applies user intents one at a time
/// (the `&mut self` receivers mirror the one-event-at-a-time UI loop of
/// the embedding application), and hands every post-mutation snapshot to
/// the background persister — fire-and-forget, never awaited by the
/// mutating caller.
pub struct TodoListService<C>
where
    C: ClearConfirmation,
{
    list: TodoList,
    confirmation: Arc<C>,
    persister: SnapshotPersister,
}

impl<C> TodoListService<C>
where
    C: ClearConfirmation,
{
    /// Constructs the service by hydrating list state from the store.
    ///
    /// A missing snapshot yields an empty list. A corrupt or unreadable
    /// snapshot is reported through the logging channel and likewise
    /// yields an empty list; the persisted blob is left untouched until
    /// the next mutation overwrites it.
    ///
    /// Must be called within a tokio runtime: the background snapshot
    /// writer is spawned here.
    pub async fn hydrate<S>(store: Arc<S>, confirmation: Arc<C>) -> Self
    where
        S: SnapshotStore + 'static,
    {
        let list = match store.load().await {
            Ok(None) => TodoList::new(),
            Ok(Some(items)) => match TodoList::from_items(items) {
                Ok(hydrated) => hydrated,
                Err(error) => {
                    tracing::error!(
                        %error,
                        "persisted snapshot violates list invariants, starting empty"
                    );
                    TodoList::new()
                }
            },
            Err(error) => {
                tracing::error!(%error, "failed to load persisted snapshot, starting empty");
                TodoList::new()
            }
        };
        let persister = SnapshotPersister::spawn(store);
        Self {
            list,
            confirmation,
            persister,
        }
    }

    /// Adds a new item with the given label and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyLabel`] when the label is empty
    /// after trimming; state is unchanged and nothing is persisted.
    pub fn add(&mut self, label: impl Into<String>) -> Result<TodoId, TodoDomainError> {
        let validated = TodoLabel::new(label)?;
        let id = self.list.add(validated);
        self.publish();
        Ok(id)
    }

    /// Marks the matching item as completed.
    ///
    /// An absent identifier is a no-op, not an error. Returns whether a
    /// matching item existed. A snapshot is persisted either way.
    pub fn complete(&mut self, id: TodoId) -> bool {
        let matched = self.list.complete(id);
        self.publish();
        matched
    }

    /// Removes the matching item.
    ///
    /// An absent identifier is a no-op, not an error. Returns whether a
    /// matching item existed. A snapshot is persisted either way.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let matched = self.list.delete(id);
        self.publish();
        matched
    }

    /// Clears the whole list after consulting the confirmation port.
    ///
    /// On cancel, state is untouched and nothing is persisted.
    pub async fn clear_all(&mut self) -> ClearOutcome {
        match self.confirmation.confirm_clear().await {
            ClearDecision::Cancelled => ClearOutcome::Cancelled,
            ClearDecision::Confirmed => {
                self.list.clear();
                self.publish();
                ClearOutcome::Cleared
            }
        }
    }

    /// Returns the items in insertion order, for rendering.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        self.list.items()
    }

    /// Returns the generation of the most recently enqueued snapshot.
    #[must_use]
    pub const fn enqueued_generation(&self) -> u64 {
        self.persister.enqueued_generation()
    }

    /// Returns the highest snapshot generation whose write has been
    /// attempted.
    #[must_use]
    pub fn persisted_generation(&self) -> u64 {
        self.persister.persisted_generation()
    }

    /// Waits until the write of the given generation has been attempted.
    pub async fn wait_for_persisted(&self, generation: u64) {
        self.persister.wait_for_persisted(generation).await;
    }

    /// Waits until every snapshot enqueued so far has reached the store.
    ///
    /// Mutations never await persistence; this is the explicit quiesce
    /// point for embedders and tests that need one.
    pub async fn flush(&self) {
        self.wait_for_persisted(self.enqueued_generation()).await;
    }

    fn publish(&mut self) {
        let snapshot = self.list.items().to_vec();
        let generation = self.persister.enqueue(snapshot);
        tracing::debug!(generation, items = self.list.len(), "snapshot enqueued");
    }
}
