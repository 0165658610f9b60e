//! In-memory substrate - used by tests and embedders that need no persistence.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::data::substrate::KeyValueStore;
use crate::domain::error::StoreError;

/// Key-value substrate held in a `HashMap` behind a `RwLock`.
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every key, returning the substrate to its uninitialized state.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .read()
            .map_err(|_| StoreError::Substrate("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::Substrate("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.write()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));
    }

    #[test]
    fn test_remove_and_clear() {
        let store = MemoryStore::new();
        store.set("key1", "value1").unwrap();
        store.set("key2", "value2").unwrap();
        store.remove("key1").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);

        store.clear().unwrap();
        assert_eq!(store.get("key2").unwrap(), None);
    }
}
