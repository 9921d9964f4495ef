//! SQLite-backed key-value store.
//!
//! One `kv` table holds every persisted collection as a JSON string. Each
//! `set` is its own autocommit statement, so a write is durable as soon
//! as it returns.

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::kv::KeyValueStore;
use crate::schema::SCHEMA_SQL;
use platelog_core::{Error, Result};

/// SQLite key-value store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the database file at `db_path`.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }

        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = FULL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Self::init_schema(&conn)?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        info!(
            "SqliteStore initialized: {} keys, path={}",
            store.count_keys()?,
            db_path.display()
        );
        Ok(store)
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;
        Ok(())
    }

    pub fn count_keys(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count = conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let value = conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![key], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        let conn = self.conn.lock();
        conn.prepare_cached(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .map_err(|e| Error::Database(e.to_string()))?
        .execute(params![key, value, now])
        .map_err(|e| Error::Database(e.to_string()))?;
        debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }
}
