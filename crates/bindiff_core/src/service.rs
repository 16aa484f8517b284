//! Diff service: the read path from store to diff result.

use crate::diff::{diff, DiffResult};
use crate::error::CoreResult;
use bindiff_storage::{PayloadStore, Slot};
use std::sync::Arc;
use tracing::debug;

/// Connects a payload store to the diff engine.
///
/// The service owns a shared handle to the store so several request
/// handlers can use the same store.
///
/// # Example
///
/// ```
/// use bindiff_core::{DiffResult, DiffService};
/// use bindiff_storage::{InMemoryStore, Slot};
/// use std::sync::Arc;
///
/// let service = DiffService::new(Arc::new(InMemoryStore::new()));
/// service.submit("1", Slot::Left, "AAAA").unwrap();
/// service.submit("1", Slot::Right, "AAAA").unwrap();
/// assert_eq!(service.diff_request("1").unwrap(), DiffResult::Equal);
/// ```
#[derive(Clone)]
pub struct DiffService {
    store: Arc<dyn PayloadStore>,
}

impl DiffService {
    /// Creates a service over `store`.
    pub fn new(store: Arc<dyn PayloadStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn PayloadStore> {
        &self.store
    }

    /// Stores one slot of a request.
    ///
    /// # Errors
    ///
    /// Returns any error from [`PayloadStore::put`].
    pub fn submit(&self, id: &str, slot: Slot, content: &str) -> CoreResult<()> {
        self.store.put(id, slot, content)?;
        Ok(())
    }

    /// Reads both slots of `id` and diffs them.
    ///
    /// The engine does not run unless both slots were read.
    ///
    /// # Errors
    ///
    /// Returns any error from [`PayloadStore::get`], unchanged in kind.
    pub fn diff_request(&self, id: &str) -> CoreResult<DiffResult> {
        let (left, right) = self.store.get(id)?;
        let result = diff(&left, &right);
        debug!(
            id,
            left_len = left.len(),
            right_len = right.len(),
            runs = result.runs().len(),
            "diffed request"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for DiffService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffRun;
    use bindiff_storage::{InMemoryStore, StorageError};

    fn service() -> DiffService {
        DiffService::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = service().diff_request("missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn left_only_diffs_against_empty() {
        let service = service();
        service.submit("1", Slot::Left, "x").unwrap();
        assert_eq!(service.diff_request("1").unwrap(), DiffResult::LengthMismatch);
    }

    #[test]
    fn both_empty_is_equal() {
        let service = service();
        service.submit("1", Slot::Right, "").unwrap();
        assert_eq!(service.diff_request("1").unwrap(), DiffResult::Equal);
    }

    #[test]
    fn diff_after_both_slots() {
        let service = service();
        service.submit("1", Slot::Right, "ABCD").unwrap();
        service.submit("1", Slot::Left, "AXCD").unwrap();
        assert_eq!(
            service.diff_request("1").unwrap(),
            DiffResult::SameLengthWithDiffs(vec![DiffRun::new(1, 1)])
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = service().submit("", Slot::Left, "x").unwrap_err();
        assert!(matches!(err.storage(), StorageError::InvalidId));
    }
}
