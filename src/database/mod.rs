//! Local persistence for pwforge.
//!
//! A single SQLite file holds a `kv_store` table of opaque blobs keyed by
//! name. The history store writes its JSON list under one key.

pub mod connection;
pub mod schema;

pub use connection::Database;
