//! SQLite database connection management for pwforge.
//!
//! [`Database`] owns a `rusqlite::Connection`, creates the schema on open,
//! and exposes raw reads and writes against the `kv_store` table.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};

use super::schema;

/// SQLite database wrapper used as the local persistence backend.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and ensures the schema.
    ///
    /// Missing parent directories are created first; if that fails, opening
    /// the connection reports the error.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    log::warn!("Could not create database directory {}: {}", parent.display(), e);
                }
            }
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        schema::ensure(&db.conn)?;
        Ok(db)
    }

    /// Opens an in-memory SQLite database and ensures the schema.
    ///
    /// The database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        schema::ensure(&db.conn)?;
        Ok(db)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Reads the raw value stored under `key`, if any.
    pub fn get_value(&self, key: &str) -> Result<Option<Vec<u8>>, rusqlite::Error> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn put_value(&self, key: &str, value: &[u8]) -> Result<(), rusqlite::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )?;
        Ok(())
    }
}
