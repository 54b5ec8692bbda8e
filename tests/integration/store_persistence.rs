//! Integration tests for snapshot persistence.
//!
//! Verifies the full-collection write-through on every mutation, the
//! load-or-empty startup behavior for absent and corrupt snapshots, and
//! deep-equality round-trips.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use termtask::store::TaskStore;
use termtask_core::task::{Frequency, Priority, TaskDraft};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a temp dir and the snapshot path inside it.
fn snapshot_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tasks.json");
    (dir, path)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A draft exercising every field.
fn rich_draft() -> TaskDraft {
    TaskDraft {
        priority: Priority::High,
        due_date: Some(date(2024, 6, 1)),
        category: "Work".to_owned(),
        assignees: vec!["Me".to_owned(), "Sarah".to_owned()],
        recurring: true,
        frequency: Frequency::Monthly,
    }
}

// ---------------------------------------------------------------------------
// Round-trip tests
// ---------------------------------------------------------------------------

#[test]
fn save_then_reload_is_deeply_equal() {
    let (_dir, path) = snapshot_path();

    let mut store = TaskStore::open(&path);
    store.add("Quarterly report", &rich_draft()).unwrap();
    store.add("Water plants", &TaskDraft::default()).unwrap();
    let saved: Vec<_> = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::open(&path);
    assert_eq!(reloaded.tasks(), saved.as_slice());
}

#[test]
fn every_mutation_is_written_through() {
    let (_dir, path) = snapshot_path();

    let mut store = TaskStore::open(&path);
    let id = store.add("tpyo", &TaskDraft::default()).unwrap().id;
    assert_eq!(TaskStore::open(&path).len(), 1);

    store.update_text(id, "typo").unwrap();
    assert_eq!(TaskStore::open(&path).tasks()[0].text, "typo");

    store.toggle_completed(id).unwrap();
    assert!(TaskStore::open(&path).tasks()[0].completed);

    store.remove(id).unwrap();
    assert!(TaskStore::open(&path).is_empty());
}

#[test]
fn rollover_is_written_through() {
    let (_dir, path) = snapshot_path();

    let mut store = TaskStore::open(&path);
    let draft = TaskDraft {
        due_date: Some(date(2024, 3, 14)),
        recurring: true,
        frequency: Frequency::Daily,
        ..TaskDraft::default()
    };
    store.add("Daily standup", &draft).unwrap();
    assert_eq!(store.roll_recurring(date(2024, 3, 15)), 1);
    drop(store);

    let reloaded = TaskStore::open(&path);
    assert_eq!(
        reloaded.tasks()[0].recurrence.next_due,
        Some(date(2024, 3, 15))
    );
}

#[test]
fn snapshot_file_is_a_json_array() {
    let (_dir, path) = snapshot_path();

    let mut store = TaskStore::open(&path);
    store.add("Inspectable", &TaskDraft::default()).unwrap();

    let blob = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Startup fallback tests
// ---------------------------------------------------------------------------

#[test]
fn missing_snapshot_starts_empty() {
    let (_dir, path) = snapshot_path();
    let store = TaskStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let (_dir, path) = snapshot_path();
    std::fs::write(&path, "{definitely not json").unwrap();

    let store = TaskStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn wrong_shape_snapshot_starts_empty() {
    let (_dir, path) = snapshot_path();
    std::fs::write(&path, "{\"todos\": []}").unwrap();

    let store = TaskStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn corrupt_snapshot_is_replaced_on_next_mutation() {
    let (_dir, path) = snapshot_path();
    std::fs::write(&path, "garbage").unwrap();

    let mut store = TaskStore::open(&path);
    store.add("Fresh start", &TaskDraft::default()).unwrap();
    drop(store);

    let reloaded = TaskStore::open(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "Fresh start");
}

#[test]
fn snapshot_parent_dirs_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("tasks.json");

    let mut store = TaskStore::open(&path);
    store.add("Deep", &TaskDraft::default()).unwrap();

    assert!(path.exists());
    assert_eq!(TaskStore::open(&path).len(), 1);
}

#[test]
fn in_memory_store_never_touches_disk() {
    let mut store = TaskStore::in_memory();
    store.add("Ephemeral", &TaskDraft::default()).unwrap();
    assert_eq!(store.len(), 1);
}
