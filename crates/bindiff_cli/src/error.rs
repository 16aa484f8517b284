//! CLI error type.

use bindiff_codec::CodecError;
use bindiff_core::CoreError;
use bindiff_storage::StorageError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad combination of arguments.
    #[error("{0}")]
    Usage(String),

    /// Failed to read an input file.
    #[error("cannot read {path:?}: {source}")]
    ReadInput {
        /// Input file path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Store error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Diff service error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Payload decoding error.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// JSON output error.
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("output failed: {0}")]
    Io(#[from] io::Error),

    /// A routed request did not succeed.
    #[error("request failed with status {0}")]
    RequestFailed(u16),
}

impl CliError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
