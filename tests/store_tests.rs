//! Integration tests for fetching documents by name.

use serde_json::json;
use slashpick::query::{Extraction, Truthiness};
use slashpick::store::{get_values, DirectoryStore, DocumentStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn create_store_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("users.json"),
        r#"{"users": [{"name": "Alice", "roles": ["admin"]}, {"name": "Bob", "roles": ["dev", "ops"]}]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("settings.yaml"), "theme: dark\nretries: 0\n").unwrap();
    fs::write(dir.path().join("broken.json"), "{oops").unwrap();
    dir
}

#[test]
fn test_directory_store_resolves_suffixes() {
    let dir = create_store_dir();
    let store = DirectoryStore::new(dir.path());

    assert_eq!(store.resolve("users").unwrap(), dir.path().join("users.json"));
    assert_eq!(
        store.resolve("settings").unwrap(),
        dir.path().join("settings.yaml")
    );
    assert_eq!(
        store.resolve("missing"),
        Err(StoreError::NotFound("missing".to_string()))
    );
}

#[test]
fn test_directory_store_prefers_json() {
    let dir = create_store_dir();
    fs::write(dir.path().join("users.yml"), "users: []\n").unwrap();
    let store = DirectoryStore::new(dir.path());

    assert_eq!(store.resolve("users").unwrap(), dir.path().join("users.json"));
}

#[test]
fn test_directory_store_load_error() {
    let dir = create_store_dir();
    let store = DirectoryStore::new(dir.path());

    match store.fetch("broken") {
        Err(StoreError::Load { name, message }) => {
            assert_eq!(name, "broken");
            assert!(message.contains("Failed to parse JSON"));
        }
        other => panic!("Expected load error, got {:?}", other),
    }
}

#[test]
fn test_get_values_from_directory() {
    let dir = create_store_dir();
    let store = DirectoryStore::new(dir.path());

    assert_eq!(
        get_values(&store, "users", "users/roles", Truthiness::Loose),
        Some(Extraction::Single(json!([["admin"], ["dev", "ops"]])))
    );
    assert_eq!(
        get_values(&store, "users", "users/[n]/name", Truthiness::Loose),
        Some(Extraction::Single(json!(["Alice", "Bob"])))
    );
    assert_eq!(
        get_values(
            &store,
            "settings",
            vec!["theme", "retries"],
            Truthiness::Loose
        ),
        Some(Extraction::Many(vec![json!("dark"), json!(0)]))
    );
}

#[test]
fn test_get_values_failures_are_none() {
    let dir = create_store_dir();
    let store = DirectoryStore::new(dir.path());

    assert_eq!(get_values(&store, "missing", "a", Truthiness::Loose), None);
    assert_eq!(get_values(&store, "broken", "a", Truthiness::Loose), None);
    assert_eq!(get_values(&store, "../users", "users", Truthiness::Loose), None);
}
