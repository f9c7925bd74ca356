use litequery::{Connection, ConnectionError, QueryError, execute};
use std::fs;

fn temp_db_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("club.db").to_string_lossy().to_string()
}

#[test]
fn test_open_close_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_db_path(&dir);

    let mut conn = Connection::open(&path).unwrap();
    assert!(conn.is_open());
    assert_eq!(conn.locator(), path);
    execute(&conn, "CREATE TABLE source (id INTEGER PRIMARY KEY, name TEXT)").unwrap();
    conn.close();
    assert!(!conn.is_open());

    // The file persists; a fresh connection sees the table
    let conn = Connection::open(&path).unwrap();
    let result = execute(&conn, "SELECT id, name FROM source").unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_open_unreachable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("no_such_subdir")
        .join("club.db")
        .to_string_lossy()
        .to_string();

    let err = Connection::open(&path).unwrap_err();
    match err {
        ConnectionError::Open { locator, .. } => assert_eq!(locator, path),
        other => panic!("Expected Open error, got: {other:?}"),
    }
}

#[test]
fn test_open_garbage_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_db_path(&dir);
    fs::write(&path, b"this is not a sqlite database at all").unwrap();

    let err = Connection::open(&path).unwrap_err();
    match err {
        ConnectionError::Invalid { locator, .. } => assert_eq!(locator, path),
        other => panic!("Expected Invalid error, got: {other:?}"),
    }
}

#[test]
fn test_open_uri_locator() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_db_path(&dir);

    // Absolute path in sqlalchemy-style URI form: sqlite:////abs/path
    let locator = format!("sqlite:///{path}");
    let conn = Connection::open(&locator).unwrap();
    execute(&conn, "CREATE TABLE source (id INTEGER)").unwrap();

    // Same file is reachable through the bare path
    let conn2 = Connection::open(&path).unwrap();
    execute(&conn2, "SELECT id FROM source").unwrap();
}

#[test]
fn test_open_in_memory() {
    let conn = Connection::open(":memory:").unwrap();
    assert!(conn.is_open());
}

#[test]
fn test_close_is_idempotent() {
    let mut conn = Connection::open(":memory:").unwrap();
    conn.close();
    conn.close();
    conn.close();
    assert!(!conn.is_open());
}

#[test]
fn test_close_after_failed_execute() {
    let mut conn = Connection::open(":memory:").unwrap();
    assert!(execute(&conn, "SELECT * FROM no_such_table").is_err());
    // Release must be safe on the failure path too
    conn.close();
    assert!(!conn.is_open());
}

#[test]
fn test_execute_after_close_errors() {
    let mut conn = Connection::open(":memory:").unwrap();
    conn.close();

    let err = execute(&conn, "SELECT 1").unwrap_err();
    match err {
        QueryError::ConnectionClosed => {}
        other => panic!("Expected ConnectionClosed error, got: {other:?}"),
    }
}
