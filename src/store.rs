//! Durable client-side key/value storage.
//!
//! Backs the persisted language preference. A single SQLite table keyed by
//! preference name; values survive process restart.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct PreferenceStore {
    conn: Arc<Mutex<Connection>>,
}

impl PreferenceStore {
    /// Open (or create) the store at the given path and create the table.
    pub fn open(path: &str) -> Result<Self> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory for {}", path))?;
            }
        }

        let conn = Connection::open(path)
            .context(format!("Failed to open preference store at {}", path))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create preferences table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// In-memory store, used by tests and as a fallback when no durable path
    /// is available.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory store")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create preferences table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Read a stored value, or `None` if the key has never been written.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();

        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .context(format!("Failed to read preference '{}'", key))?;

        Ok(value)
    }

    /// Write a value, replacing any previous one for the same key.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .context(format!("Failed to write preference '{}'", key))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = PreferenceStore::in_memory().unwrap();
        assert_eq!(store.get("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = PreferenceStore::in_memory().unwrap();
        store.set("healthmate-language", "ur").unwrap();
        assert_eq!(
            store.get("healthmate-language").unwrap(),
            Some("ur".to_string())
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = PreferenceStore::in_memory().unwrap();
        store.set("healthmate-language", "ur").unwrap();
        store.set("healthmate-language", "en").unwrap();
        assert_eq!(
            store.get("healthmate-language").unwrap(),
            Some("en".to_string())
        );
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");
        let path = path.to_str().unwrap();

        {
            let store = PreferenceStore::open(path).unwrap();
            store.set("healthmate-language", "ur").unwrap();
        }

        let store = PreferenceStore::open(path).unwrap();
        assert_eq!(
            store.get("healthmate-language").unwrap(),
            Some("ur".to_string())
        );
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.db");
        let store = PreferenceStore::open(path.to_str().unwrap()).unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_clone_shares_connection() {
        let store = PreferenceStore::in_memory().unwrap();
        let clone = store.clone();
        clone.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
