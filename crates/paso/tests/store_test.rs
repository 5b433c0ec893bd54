//! Tests for the JSON file state store.

use std::fs;
use tempfile::TempDir;

use paso::{JsonFileStore, StateStore};

#[test]
fn test_missing_file_is_empty_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::open(dir.path().join("state.json")).expect("Open failed");
    assert_eq!(store.get("anything").expect("Get failed"), None);
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");

    let mut store = JsonFileStore::open(&path).expect("Open failed");
    store.save("gallery", &vec!["cartel", "diploma"]).expect("Save failed");

    let reopened = JsonFileStore::open(&path).expect("Reopen failed");
    let gallery: Option<Vec<String>> = reopened.load("gallery").expect("Load failed");
    assert_eq!(gallery, Some(vec!["cartel".to_string(), "diploma".to_string()]));
}

#[test]
fn test_remove_persists() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");

    let mut store = JsonFileStore::open(&path).expect("Open failed");
    store.set("key", "\"value\"".to_string()).expect("Set failed");
    store.remove("key").expect("Remove failed");
    store.remove("never-set").expect("Removing a missing key should succeed");

    let reopened = JsonFileStore::open(&path).expect("Reopen failed");
    assert_eq!(reopened.get("key").expect("Get failed"), None);
}

#[test]
fn test_nested_directory_created() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("a").join("b").join("state.json");

    let mut store = JsonFileStore::open(&path).expect("Open failed");
    store.set("k", "1".to_string()).expect("Set failed");
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_fails_to_open() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");
    fs::write(&path, "not json at all").expect("Write failed");

    let result = JsonFileStore::open(&path);
    assert!(result.is_err(), "Corrupt state should be reported");
}

#[test]
fn test_empty_file_is_empty_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");
    fs::write(&path, "").expect("Write failed");

    let store = JsonFileStore::open(&path).expect("Open failed");
    assert_eq!(store.get("k").expect("Get failed"), None);
}

#[test]
fn test_failed_write_leaves_entries_unchanged() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a regular file").expect("Write failed");

    // The parent of the state file is a file, so the directory cannot be created.
    let mut store = JsonFileStore::open(blocker.join("state.json")).expect("Open failed");
    assert!(store.set("k", "1".to_string()).is_err());
    assert_eq!(store.get("k").expect("Get failed"), None);
}

#[test]
fn test_failed_remove_keeps_entry() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");

    let mut store = JsonFileStore::open(&path).expect("Open failed");
    store.set("k", "1".to_string()).expect("Set failed");
    assert_eq!(store.path(), path.as_path());

    // Replace the state file with a directory so the rewrite fails.
    fs::remove_file(&path).expect("Remove file failed");
    fs::create_dir(&path).expect("Create dir failed");

    assert!(store.remove("k").is_err());
    assert_eq!(store.get("k").expect("Get failed"), Some("1".to_string()));
}
