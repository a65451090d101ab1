//! Store backend trait.

use super::StoreError;

/// Backend trait for key-value storage.
///
/// Implementations handle raw string storage/retrieval. The [`Store`]
/// wraps this with typed serialization.
///
/// All operations are synchronous: the page event model runs each
/// callback to completion before the next one dispatches, so the store
/// is single-writer-at-a-time by construction.
///
/// [`Store`]: super::Store
pub trait StoreBackend: Send + Sync {
    /// Get the value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set the value for a key, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}
