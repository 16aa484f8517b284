//! Error types for bindiff core.

use bindiff_storage::StorageError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in bindiff core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Payload store error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CoreError {
    /// Returns the underlying storage error.
    #[must_use]
    pub fn storage(&self) -> &StorageError {
        match self {
            CoreError::Storage(e) => e,
        }
    }

    /// Returns true if no record exists for the requested id.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.storage(), StorageError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_storage_errors() {
        let err = CoreError::from(StorageError::not_found("9"));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("storage error"));

        let err = CoreError::from(StorageError::InvalidId);
        assert!(!err.is_not_found());
    }
}
