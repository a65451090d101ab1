//! In-memory backend using DashMap.

use dashmap::DashMap;

use super::{StoreBackend, StoreError};

/// A volatile in-memory backend.
///
/// Data is lost when the process exits. This is the backend tests and
/// demos inject in place of the durable [`SqliteBackend`].
///
/// [`SqliteBackend`]: super::SqliteBackend
///
/// # Example
///
/// ```
/// use pagepad_store::{MemoryBackend, Store};
///
/// let store = Store::new(MemoryBackend::new());
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
