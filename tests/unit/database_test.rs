//! Unit tests for the pwforge database layer (connection + schema).

use pwforge::database::schema;
use pwforge::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_open_creates_kv_store() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_store should exist after open");
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    db.put_value("k", b"kept").unwrap();
    schema::ensure(db.connection()).unwrap();
    assert_eq!(db.get_value("k").unwrap(), Some(b"kept".to_vec()));
}

#[test]
fn test_get_missing_value_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_value("password_history").unwrap(), None);
}

#[test]
fn test_put_value_overwrites() {
    let db = Database::open_in_memory().unwrap();
    db.put_value("k", b"first").unwrap();
    db.put_value("k", b"second").unwrap();
    assert_eq!(db.get_value("k").unwrap(), Some(b"second".to_vec()));

    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_file_database_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("pwforge.db");

    {
        let db = Database::open(&path).unwrap();
        db.put_value("password_history", b"[]").unwrap();
    }

    let reopened = Database::open(&path).unwrap();
    assert_eq!(
        reopened.get_value("password_history").unwrap(),
        Some(b"[]".to_vec())
    );
}
