//! SQLite backend with in-memory cache.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use log::debug;
use rusqlite::Connection;

use super::{StoreBackend, StoreError};

/// SQLite-backed durable storage with a DashMap read-through cache.
///
/// This is the stand-in for the browser's origin-scoped store: values
/// survive restarts and are cleared only by deleting the database file.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: DashMap<String, String>,
}

impl SqliteBackend {
    /// Create a new SQLite backend at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        debug!("opening store database at {}", path.as_ref().display());
        Self::with_connection(Connection::open(path)?)
    }

    /// Create a backend on an in-memory database (no durability).
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means a panic mid-query; the connection
        // itself is still usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoreBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        // Check cache first
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        // Cache miss - query DB
        let result = {
            let conn = self.conn();
            let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?")?;
            let mut rows = stmt.query([key])?;
            match rows.next()? {
                Some(row) => Some(row.get::<_, String>(0)?),
                None => None,
            }
        };

        // Populate cache
        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn().execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;

        // Update cache
        self.cache.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.conn()
            .execute("DELETE FROM kv WHERE key = ?", [key])?;

        // Remove from cache
        self.cache.remove(key);

        Ok(())
    }
}
