//! SQLite backend

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StoreError;

use super::Store;

/// Store backed by a single SQLite table
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                collection TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (collection, key)
            )",
            [],
        )?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn get(&self, collection: &str, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM records WHERE collection = ?1 AND key = ?2",
                params![collection, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, collection: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO records (collection, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (collection, key)
             DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![collection, key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn delete(&self, collection: &str, key: &str) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "DELETE FROM records WHERE collection = ?1 AND key = ?2",
            params![collection, key],
        )?;
        Ok(changed > 0)
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, String)>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM records WHERE collection = ?1 ORDER BY key")?;

        let rows = stmt
            .query_map(params![collection], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Repository;
    use crate::plates::PlateSet;

    #[test]
    fn test_put_get_overwrite() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("c", "k").unwrap(), None);

        store.put("c", "k", "one").unwrap();
        store.put("c", "k", "two").unwrap();
        assert_eq!(store.get("c", "k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_collections_are_separate() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put("a", "k", "1").unwrap();
        store.put("b", "k", "2").unwrap();
        assert_eq!(store.list("a").unwrap(), vec![("k".to_string(), "1".to_string())]);
        assert!(store.delete("b", "k").unwrap());
        assert_eq!(store.get("a", "k").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_list_ordered_by_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put("c", "b", "2").unwrap();
        store.put("c", "a", "1").unwrap();
        store.put("c", "c", "3").unwrap();
        let keys: Vec<String> = store.list("c").unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delete_missing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(!store.delete("c", "nope").unwrap());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ironplan.db");

        {
            let repo = Repository::new(SqliteStore::open(&path).unwrap());
            repo.save_plate_set(&PlateSet::standard_lb()).unwrap();
            repo.log_one_rep_max("squat", 315.0, None).unwrap();
        }

        let repo = Repository::new(SqliteStore::open(&path).unwrap());
        assert_eq!(repo.plate_set("standard-lb").unwrap(), Some(PlateSet::standard_lb()));
        let history = repo.one_rep_max_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].weight, 315.0);
    }
}
