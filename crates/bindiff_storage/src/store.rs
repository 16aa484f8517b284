//! Payload store trait definition.

use crate::error::{StorageError, StorageResult};
use crate::slot::Slot;

/// A durable mapping from request id to a two-slot record.
///
/// # Invariants
///
/// - After any successful `put(id, ..)`, `get(id)` returns both slots
/// - `put` to one slot never changes the other slot
/// - The first `put` for an id initializes the other slot to `""`
/// - A failed `put` leaves the record as it was before the call
///
/// # Implementors
///
/// - [`super::InMemoryStore`] - For testing
/// - [`super::FileStore`] - For persistent storage
pub trait PayloadStore: Send + Sync {
    /// Writes `content` into one slot of the record for `id`, creating the
    /// record if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is empty ([`StorageError::InvalidId`])
    /// - The record cannot be persisted (I/O or codec failure)
    fn put(&self, id: &str, slot: Slot, content: &str) -> StorageResult<()>;

    /// Reads both slots of the record for `id` as `(left, right)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is empty ([`StorageError::InvalidId`])
    /// - No record exists ([`StorageError::NotFound`])
    /// - The record cannot be read (I/O or codec failure)
    fn get(&self, id: &str) -> StorageResult<(String, String)>;

    /// Returns true if a record exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn contains(&self, id: &str) -> StorageResult<bool>;

    /// Returns every stored request id in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn ids(&self) -> StorageResult<Vec<String>>;

    /// Parses `slot` and writes to it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSlot`] for an unknown slot name, or
    /// any error from [`PayloadStore::put`].
    fn put_named(&self, id: &str, slot: &str, content: &str) -> StorageResult<()> {
        let slot: Slot = slot.parse()?;
        self.put(id, slot, content)
    }
}

/// Rejects empty request ids.
///
/// # Errors
///
/// Returns [`StorageError::InvalidId`] if `id` is empty.
pub fn validate_id(id: &str) -> StorageResult<()> {
    if id.is_empty() {
        return Err(StorageError::InvalidId);
    }
    Ok(())
}
