//! In-memory payload store for testing.

use crate::error::{StorageError, StorageResult};
use crate::record::RequestRecord;
use crate::slot::Slot;
use crate::store::{validate_id, PayloadStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory payload store.
///
/// This store keeps all records in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral services that don't need persistence
///
/// # Thread Safety
///
/// Each `put` runs its create-or-update under a single write lock, so
/// concurrent writes to different slots of the same id never lose data.
///
/// # Example
///
/// ```rust
/// use bindiff_storage::{InMemoryStore, PayloadStore, Slot};
///
/// let store = InMemoryStore::new();
/// store.put("7", Slot::Right, "BBBB").unwrap();
/// store.put("7", Slot::Left, "AAAA").unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, RequestRecord>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = RequestRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.id().to_string(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Returns a copy of the record for `id`, if any.
    #[must_use]
    pub fn record(&self, id: &str) -> Option<RequestRecord> {
        self.records.read().get(id).cloned()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl PayloadStore for InMemoryStore {
    fn put(&self, id: &str, slot: Slot, content: &str) -> StorageResult<()> {
        validate_id(id)?;
        let mut records = self.records.write();
        records
            .entry(id.to_string())
            .or_insert_with(|| RequestRecord::new(id))
            .set(slot, content);
        Ok(())
    }

    fn get(&self, id: &str) -> StorageResult<(String, String)> {
        validate_id(id)?;
        self.records
            .read()
            .get(id)
            .map(RequestRecord::to_pair)
            .ok_or_else(|| StorageError::not_found(id))
    }

    fn contains(&self, id: &str) -> StorageResult<bool> {
        Ok(self.records.read().contains_key(id))
    }

    fn ids(&self) -> StorageResult<Vec<String>> {
        let mut ids: Vec<String> = self.records.read().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
