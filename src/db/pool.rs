//! SQLite connection wrapper (lightweight for CLI usage) and the durable
//! key-value backend.

use crate::db::initialize::init_db;
use crate::db::kv::KeyValueStore;
use crate::db::memory::MemoryStore;
use crate::errors::{AppResult, StoreError};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::warn;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database at `path` and bring its schema up to date.
    /// Opening the same file repeatedly is harmless.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }

    /// Every stored key, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM kv_store ORDER BY key ASC")?;

        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(keys)
    }
}

/// Open the database at `path`, or an empty in-memory store when it cannot be
/// opened. Nothing written to the fallback survives the process.
pub fn open_or_memory(path: &str) -> Box<dyn KeyValueStore> {
    match DbPool::new(path) {
        Ok(pool) => Box::new(pool),
        Err(e) => {
            warn!(error = %e, path, "database unavailable, using in-memory store");
            Box::new(MemoryStore::new())
        }
    }
}

impl KeyValueStore for DbPool {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;

        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;

        stmt.execute(params![key, value, now])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| conn.execute("DELETE FROM kv_store WHERE key = ?1", [key]))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.with_conn(|conn| conn.execute("DELETE FROM kv_store", []))?;
        Ok(())
    }
}
