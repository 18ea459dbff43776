//! In-process backend for tests and throwaway sessions

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::StoreError;

use super::Store;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, collection: &str, key: &str) -> Result<Option<String>, StoreError> {
        let records = self.records.borrow();
        Ok(records.get(&(collection.to_string(), key.to_string())).cloned())
    }

    fn put(&self, collection: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.records
            .borrow_mut()
            .insert((collection.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn delete(&self, collection: &str, key: &str) -> Result<bool, StoreError> {
        let removed = self
            .records
            .borrow_mut()
            .remove(&(collection.to_string(), key.to_string()));
        Ok(removed.is_some())
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, String)>, StoreError> {
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|((_, k), v)| (k.clone(), v.clone()))
            .collect())
    }
}
