//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up payload stores
//! and diff services in tests.

use bindiff_core::DiffService;
use bindiff_storage::{FileStore, InMemoryStore, PayloadStore, StoreConfig};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// A test store with automatic cleanup.
pub struct TestStore {
    /// The store instance.
    pub store: Arc<dyn PayloadStore>,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Creates a new in-memory test store.
    pub fn memory() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            _temp_dir: None,
        }
    }

    /// Creates a new file-backed test store in a temporary directory.
    ///
    /// Writes are not fsynced, which keeps test suites fast.
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = StoreConfig::default().sync_on_write(false);
        let store = FileStore::open(temp_dir.path(), config).expect("Failed to open file store");

        Self {
            store: Arc::new(store),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the store directory if file-backed, None if in-memory.
    pub fn path(&self) -> Option<&Path> {
        self._temp_dir.as_ref().map(TempDir::path)
    }

    /// Creates a diff service sharing this store.
    pub fn service(&self) -> DiffService {
        DiffService::new(Arc::clone(&self.store))
    }
}

impl std::ops::Deref for TestStore {
    type Target = dyn PayloadStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}

/// Returns a request id that no other test will use.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Runs a test with a diff service over an in-memory store.
///
/// # Example
///
/// ```rust
/// use bindiff_testkit::with_memory_service;
///
/// with_memory_service(|service| {
///     assert!(service.diff_request("missing").is_err());
/// });
/// ```
pub fn with_memory_service<F, R>(f: F) -> R
where
    F: FnOnce(&DiffService) -> R,
{
    let store = TestStore::memory();
    f(&store.service())
}

/// Runs a test with a diff service over a temporary file store.
pub fn with_file_service<F, R>(f: F) -> R
where
    F: FnOnce(&DiffService, &Path) -> R,
{
    let store = TestStore::file();
    let path = store.path().expect("File store should have a path");
    f(&store.service(), path)
}

/// Runs `f` once against each store flavor, labelled for assertion messages.
pub fn for_each_store<F>(mut f: F)
where
    F: FnMut(&str, &TestStore),
{
    f("memory", &TestStore::memory());
    f("file", &TestStore::file());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindiff_storage::Slot;

    #[test]
    fn test_memory_store() {
        let store = TestStore::memory();
        assert!(store.path().is_none());
        store.put("1", Slot::Left, "A").unwrap();
        assert!(store.contains("1").unwrap());
    }

    #[test]
    fn test_file_store() {
        let store = TestStore::file();
        let dir = store.path().unwrap().to_path_buf();
        assert!(dir.exists());
        store.put("1", Slot::Right, "B").unwrap();
        assert_eq!(store.get("1").unwrap(), (String::new(), "B".to_string()));
    }

    #[test]
    fn test_unique_ids_differ() {
        assert_ne!(unique_id(), unique_id());
    }

    #[test]
    fn test_for_each_store_visits_both() {
        let mut seen = Vec::new();
        for_each_store(|name, _| seen.push(name.to_string()));
        assert_eq!(seen, ["memory", "file"]);
    }

    #[test]
    fn test_with_file_service() {
        with_file_service(|service, path| {
            service.submit("x", Slot::Left, "data").unwrap();
            assert!(path.read_dir().unwrap().count() > 0);
        });
    }
}
