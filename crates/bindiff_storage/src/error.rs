//! Error types for storage operations.

use bindiff_codec::CodecError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot name is neither `left` nor `right`.
    #[error("invalid slot: {name:?} (expected \"left\" or \"right\")")]
    InvalidSlot {
        /// The rejected slot name.
        name: String,
    },

    /// The request id is empty.
    #[error("request id must not be empty")]
    InvalidId,

    /// No record exists for the request id.
    #[error("no record for request id {id:?}")]
    NotFound {
        /// The request id that was looked up.
        id: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A stored record is inconsistent with its key.
    #[error("storage corrupted: {0}")]
    Corrupted(String),

    /// Another process owns the store directory.
    #[error("store locked: another process has exclusive access to {}", path.display())]
    Locked {
        /// The store directory.
        path: PathBuf,
    },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates an invalid slot error.
    pub fn invalid_slot(name: impl Into<String>) -> Self {
        Self::InvalidSlot { name: name.into() }
    }

    /// Returns true if the backing storage failed, as opposed to the caller
    /// asking for something invalid or absent.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            StorageError::Io(_)
                | StorageError::Codec(_)
                | StorageError::Corrupted(_)
                | StorageError::Locked { .. }
        )
    }
}
