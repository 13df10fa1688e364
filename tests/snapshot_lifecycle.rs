//! End-to-end lifecycle tests: service sessions over on-disk snapshots.

use std::path::Path;
use std::sync::Arc;

use jotter::todo::{
    adapters::{fs::FileSnapshotStore, memory::StaticClearConfirmation},
    services::{ClearOutcome, TodoListService},
};
use rstest::rstest;
use tempfile::TempDir;

async fn session(dir: &Path) -> eyre::Result<TodoListService<StaticClearConfirmation>> {
    let store = FileSnapshotStore::create(dir).await?;
    Ok(TodoListService::hydrate(
        Arc::new(store),
        Arc::new(StaticClearConfirmation::confirming()),
    )
    .await)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn state_survives_session_restarts() -> eyre::Result<()> {
    let dir = TempDir::new()?;

    let mut first = session(dir.path()).await?;
    let milk = first.add("Buy milk")?;
    let bob = first.add("Call Bob")?;
    first.complete(milk);
    first.flush().await;
    let first_view = first.todos().to_vec();
    drop(first);

    let mut second = session(dir.path()).await?;
    assert_eq!(second.todos(), first_view.as_slice());
    second.delete(bob);
    second.flush().await;
    drop(second);

    let mut third = session(dir.path()).await?;
    assert_eq!(third.todos().len(), 1);
    let remaining = third.todos().first().ok_or_else(|| eyre::eyre!("item"))?;
    assert_eq!(remaining.label().as_str(), "Buy milk");
    assert!(remaining.is_completed());

    assert_eq!(third.clear_all().await, ClearOutcome::Cleared);
    third.flush().await;
    drop(third);

    let fourth = session(dir.path()).await?;
    assert!(fourth.todos().is_empty());
    let contents = tokio::fs::read_to_string(dir.path().join("todos.json")).await?;
    assert_eq!(contents, "[]");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_hydrates_empty_and_recovers_on_next_mutation() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(dir.path().join("todos.json"), "{not json").await?;

    let mut service = session(dir.path()).await?;
    assert!(service.todos().is_empty());

    service.add("Buy milk")?;
    service.flush().await;
    drop(service);

    let recovered = session(dir.path()).await?;
    assert_eq!(recovered.todos().len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifier_allocation_resumes_above_persisted_items() -> eyre::Result<()> {
    let dir = TempDir::new()?;

    let mut first = session(dir.path()).await?;
    let milk = first.add("Buy milk")?;
    let bob = first.add("Call Bob")?;
    first.flush().await;
    drop(first);

    let mut second = session(dir.path()).await?;
    let fresh = second.add("Water plants")?;
    assert!(fresh > milk);
    assert!(fresh > bob);
    Ok(())
}
