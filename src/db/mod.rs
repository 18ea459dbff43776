//! Database module - pluggable key/value storage for ironplan records
//!
//! Records are JSON documents grouped in collections. The backend is passed
//! into [`Repository::new`]; there is no global store.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::plates::{current_location_plate_set, GeoPoint, PlateSet};

const ONE_REP_MAXES: &str = "one_rep_maxes";
const PLATE_SETS: &str = "plate_sets";
const SETTINGS: &str = "settings";
const LOCATION_KEY: &str = "location";

/// Storage backend. Last write wins; `list` is ordered by key.
pub trait Store {
    fn get(&self, collection: &str, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, collection: &str, key: &str, value: &str) -> Result<(), StoreError>;
    /// Returns true if the key existed
    fn delete(&self, collection: &str, key: &str) -> Result<bool, StoreError>;
    fn list(&self, collection: &str) -> Result<Vec<(String, String)>, StoreError>;
}

/// A logged one-rep max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxEntry {
    pub id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Typed access to ironplan records on top of a [`Store`]
pub struct Repository<S: Store> {
    store: S,
}

impl<S: Store> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn put_json<T: Serialize>(
        &self,
        collection: &str,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.store.put(collection, key, &json)?;
        debug!(collection, key, "record saved");
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        match self.store.get(collection, key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn list_json<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        self.store
            .list(collection)?
            .into_iter()
            .map(|(_, json)| serde_json::from_str(&json).map_err(StoreError::from))
            .collect()
    }

    /// Log a one-rep max dated now
    pub fn log_one_rep_max(
        &self,
        exercise_id: &str,
        weight: f64,
        notes: Option<String>,
    ) -> Result<OneRepMaxEntry, StoreError> {
        self.log_one_rep_max_at(exercise_id, weight, Utc::now(), notes)
    }

    /// Log a one-rep max with an explicit date
    pub fn log_one_rep_max_at(
        &self,
        exercise_id: &str,
        weight: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<OneRepMaxEntry, StoreError> {
        // Keys sort chronologically; bump on collision
        let mut stamp = date.timestamp_micros();
        let mut id = format!("{:020}", stamp);
        while self.store.get(ONE_REP_MAXES, &id)?.is_some() {
            stamp += 1;
            id = format!("{:020}", stamp);
        }

        let entry = OneRepMaxEntry {
            id,
            exercise_id: exercise_id.to_string(),
            weight,
            date,
            notes,
        };
        self.put_json(ONE_REP_MAXES, &entry.id, &entry)?;
        Ok(entry)
    }

    /// All logged maxes, oldest first
    pub fn one_rep_max_history(&self) -> Result<Vec<OneRepMaxEntry>, StoreError> {
        let mut entries: Vec<OneRepMaxEntry> = self.list_json(ONE_REP_MAXES)?;
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    pub fn delete_one_rep_max(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(ONE_REP_MAXES, id)
    }

    /// Insert or replace by name
    pub fn save_plate_set(&self, set: &PlateSet) -> Result<(), StoreError> {
        self.put_json(PLATE_SETS, &set.name, set)
    }

    pub fn plate_set(&self, name: &str) -> Result<Option<PlateSet>, StoreError> {
        self.get_json(PLATE_SETS, name)
    }

    pub fn plate_sets(&self) -> Result<Vec<PlateSet>, StoreError> {
        self.list_json(PLATE_SETS)
    }

    pub fn delete_plate_set(&self, name: &str) -> Result<bool, StoreError> {
        self.store.delete(PLATE_SETS, name)
    }

    /// Plate set to load with: the named set, else the stored set within
    /// 1 km of the stored location, else the standard lb (or kg) set.
    /// `None` only when a name is given and no such set is stored.
    pub fn resolve_plate_set(
        &self,
        name: Option<&str>,
        kg: bool,
    ) -> Result<Option<PlateSet>, StoreError> {
        if let Some(name) = name {
            return self.plate_set(name);
        }

        let sets = self.plate_sets()?;
        let resolved = match current_location_plate_set(self.location()?, &sets) {
            Some(nearby) => nearby.clone(),
            None if kg => PlateSet::standard_kg(),
            None => PlateSet::standard_lb(),
        };
        debug!(set = %resolved.name, "plate set resolved");
        Ok(Some(resolved))
    }

    pub fn set_location(&self, location: GeoPoint) -> Result<(), StoreError> {
        self.put_json(SETTINGS, LOCATION_KEY, &location)
    }

    pub fn location(&self) -> Result<Option<GeoPoint>, StoreError> {
        self.get_json(SETTINGS, LOCATION_KEY)
    }
}
