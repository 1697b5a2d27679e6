//! Integration tests for file and directory loading into a query registry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use query_manager_core::QueryError;
use query_manager_files::{LoadError, RegistryLoader, load_dir, load_files};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_files_merges_in_order() {
    let dir = tempdir().unwrap();
    let first = write_file(
        dir.path(),
        "users.sql",
        "--@users.getAll@\nSELECT * FROM users;\n--@users.shared@\nSELECT 1;",
    );
    let second = write_file(
        dir.path(),
        "overrides.sql",
        "--@users.shared@\nSELECT 2;",
    );

    let registry = load_files(&[first, second]).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("users.getAll").unwrap(), "SELECT * FROM users;");
    assert_eq!(registry.get("users.shared").unwrap(), "SELECT 2;");
}

#[test]
fn test_load_files_rejects_blank_path() {
    let err = load_files(&["", "sql/users.sql"]).unwrap_err();
    match err {
        LoadError::Query(QueryError::InvalidInput(message)) => {
            assert!(message.contains("index 0"), "unexpected message: {message}");
        }
        other => panic!("expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_load_files_missing_file_is_io_error() {
    let err = load_files(&["/nonexistent/users.sql"]).unwrap_err();
    assert!(matches!(err, LoadError::IoError(_)));
}

#[test]
fn test_load_files_empty_list_yields_empty_registry() {
    let registry = load_files::<&str>(&[]).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_load_dir_reads_only_sql_files_in_name_order() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.sql", "--@q.dup@\nSELECT 'a';");
    write_file(dir.path(), "b.sql", "--@q.dup@\nSELECT 'b';\n--@q.other@\nSELECT 3;");
    write_file(dir.path(), "notes.txt", "--@q.ignored@\nSELECT 4;");

    let registry = load_dir(dir.path()).unwrap();
    assert_eq!(registry.len(), 2);
    // b.sql sorts after a.sql, so its duplicate wins.
    assert_eq!(registry.get("q.dup").unwrap(), "SELECT 'b';");
    assert!(!registry.contains("q.ignored"));
}

#[test]
fn test_builder_requires_at_least_one_source() {
    let result = RegistryLoader::new().build();
    assert!(matches!(result, Err(LoadError::NoSourcesConfigured)));
}

#[test]
fn test_builder_merges_dir_then_file_overrides() {
    let base = tempdir().unwrap();
    write_file(
        base.path(),
        "users.sql",
        "--@users.getAll@\nSELECT * FROM users;\n--@users.getEmailBy@\nSELECT 0;",
    );
    let overrides = tempdir().unwrap();
    let override_file = write_file(
        overrides.path(),
        "users.sql",
        "--@users.getEmailBy@\nSELECT * FROM users\nWHERE email='{email}';",
    );

    let registry = RegistryLoader::new()
        .from_dir(base.path())
        .from_file(&override_file)
        .build()
        .unwrap();

    assert_eq!(registry.get("users.getAll").unwrap(), "SELECT * FROM users;");

    let mut params = HashMap::new();
    params.insert("email".to_string(), "jane@example.com".to_string());
    assert_eq!(
        registry.get_with("users.getEmailBy", &params).unwrap(),
        "SELECT * FROM users WHERE email='jane@example.com';"
    );
}

#[test]
fn test_builder_propagates_source_failure() {
    let result = RegistryLoader::new().from_dir("/nonexistent/sql/").build();
    assert!(matches!(result, Err(LoadError::IoError(_))));
}
