//! In-memory storage

use super::{StoreError, Storage};
use rustc_hash::FxHashMap;

/// Volatile storage, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the blob under `key`
    pub fn remove(&mut self, key: &str) {
        self.blobs.remove(key);
    }
}

impl Storage for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
