//! Schema for the pwforge SQLite database: one key/value table.

use rusqlite::Connection;

/// Creates the `kv_store` table if it is missing. Runs on every open.
pub fn ensure(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS kv_store (
             key TEXT PRIMARY KEY,
             value BLOB NOT NULL,
             updated_at INTEGER NOT NULL
         );",
    )
}
