//! Integration tests for the schema version probe
//!
//! Databases are fabricated with rusqlite the same way the CLI lays them out:
//! a `metadata(key, value)` table holding `bd_version`.

use beads_store::{Error, count_issues, read_version_marker};
use rusqlite::{Connection, params};
use std::path::Path;
use tempfile::TempDir;

fn create_db_with_marker(path: &Path, marker: Option<&str>) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch("CREATE TABLE metadata (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    if let Some(marker) = marker {
        conn.execute(
            "INSERT INTO metadata (key, value) VALUES ('bd_version', ?1)",
            params![marker],
        )
        .unwrap();
    }
}

#[test]
fn test_reads_text_marker() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    create_db_with_marker(&db_path, Some("0.20.1"));

    assert_eq!(read_version_marker(&db_path).unwrap(), "0.20.1");
}

#[test]
fn test_reads_integer_marker() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE metadata (key TEXT PRIMARY KEY, value);
         INSERT INTO metadata (key, value) VALUES ('bd_version', 3);",
    )
    .unwrap();
    drop(conn);

    assert_eq!(read_version_marker(&db_path).unwrap(), "3");
}

#[test]
fn test_missing_marker_row() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    create_db_with_marker(&db_path, None);

    let err = read_version_marker(&db_path).unwrap_err();
    assert!(matches!(err, Error::InvalidMarker(_)));
}

#[test]
fn test_empty_file_has_no_metadata_table() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    std::fs::write(&db_path, b"").unwrap();

    let err = read_version_marker(&db_path).unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert!(err.to_string().contains("metadata"));
}

#[test]
fn test_garbage_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    std::fs::write(&db_path, b"definitely not a sqlite database, just some text padding").unwrap();

    assert!(read_version_marker(&db_path).is_err());
}

#[test]
fn test_probe_does_not_create_missing_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");

    assert!(read_version_marker(&db_path).is_err());
    assert!(!db_path.exists());
}

#[test]
fn test_count_issues() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch("CREATE TABLE issues (id TEXT PRIMARY KEY, title TEXT NOT NULL);")
        .unwrap();

    assert_eq!(count_issues(&db_path).unwrap(), 0);

    conn.execute_batch(
        "INSERT INTO issues (id, title) VALUES ('bd-1', 'first'), ('bd-2', 'second');",
    )
    .unwrap();
    assert_eq!(count_issues(&db_path).unwrap(), 2);
}

#[test]
fn test_count_issues_without_table() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("beads.db");
    create_db_with_marker(&db_path, Some("0.21.0"));

    assert!(matches!(count_issues(&db_path), Err(Error::Database(_))));
}
