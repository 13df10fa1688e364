//! Integration tests for the file-backed snapshot store.

use jotter::todo::{
    adapters::fs::FileSnapshotStore,
    domain::{Todo, TodoId, TodoLabel},
    ports::{SnapshotStore, SnapshotStoreError},
};
use rstest::rstest;
use tempfile::TempDir;

fn todo(id: u64, label: &str, completed: bool) -> eyre::Result<Todo> {
    Ok(Todo::from_parts(
        TodoId::from_value(id),
        TodoLabel::new(label)?,
        completed,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_returns_none_for_a_fresh_directory() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let store = FileSnapshotStore::create(dir.path()).await?;

    assert!(store.load().await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_load_round_trips_items_on_disk() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let store = FileSnapshotStore::create(dir.path()).await?;
    let items = vec![
        todo(1, "Buy milk", false)?,
        todo(2, "Call Bob", true)?,
        todo(5, "Water plants", false)?,
    ];

    store.save(&items).await?;
    let loaded = store.load().await?;

    assert_eq!(loaded, Some(items));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_overwrites_and_leaves_only_the_snapshot_file() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let store = FileSnapshotStore::create(dir.path()).await?;

    store.save(&[todo(1, "Buy milk", false)?]).await?;
    store.save(&[todo(2, "Call Bob", true)?]).await?;

    let loaded = store.load().await?;
    assert_eq!(loaded, Some(vec![todo(2, "Call Bob", true)?]));

    let names: Vec<String> = std::fs::read_dir(dir.path())?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect::<eyre::Result<_>>()?;
    assert_eq!(names, vec!["todos.json".to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_file_holds_the_stable_wire_format() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let store = FileSnapshotStore::create(dir.path()).await?;

    store.save(&[todo(1, "Buy milk", false)?]).await?;

    let contents = tokio::fs::read_to_string(store.path()).await?;
    assert_eq!(
        contents,
        r#"[{"id":1,"task":"Buy milk","completed":false}]"#
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_file_yields_a_corrupt_error() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let store = FileSnapshotStore::create(dir.path()).await?;
    tokio::fs::write(store.path(), "definitely not json").await?;

    let result = store.load().await;

    assert!(matches!(result, Err(SnapshotStoreError::Corrupt(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_builds_missing_storage_directories() -> eyre::Result<()> {
    let dir = TempDir::new()?;
    let nested = dir.path().join("nested").join("storage");
    let store = FileSnapshotStore::create(&nested).await?;

    store.save(&[todo(1, "Buy milk", false)?]).await?;

    assert!(nested.join("todos.json").is_file());
    assert_eq!(store.load().await?, Some(vec![todo(1, "Buy milk", false)?]));
    Ok(())
}
