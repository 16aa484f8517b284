//! Error types for the diff API.

use bindiff_codec::CodecError;
use bindiff_core::CoreError;
use bindiff_storage::StorageError;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while handling a request.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid request (empty id, malformed body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No record exists for the request id.
    #[error("not found: {0}")]
    NotFound(String),

    /// The decoded payload exceeds the configured limit.
    #[error("payload too large: {len} bytes exceeds limit of {max}")]
    PayloadTooLarge {
        /// Decoded payload length.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// No endpoint matches the path.
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// The endpoint exists but not for this method.
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed {
        /// Request method.
        method: String,
        /// Request path.
        path: String,
    },

    /// The payload store failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ServerError {
    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::InvalidRequest(_) => 400,
            ServerError::NotFound(_) | ServerError::RouteNotFound(_) => 404,
            ServerError::MethodNotAllowed { .. } => 405,
            ServerError::PayloadTooLarge { .. } => 413,
            ServerError::Storage(_) => 500,
        }
    }

    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

impl From<StorageError> for ServerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => ServerError::NotFound(format!("request id {id:?}")),
            StorageError::InvalidId | StorageError::InvalidSlot { .. } => {
                ServerError::InvalidRequest(err.to_string())
            }
            other => ServerError::Storage(other.to_string()),
        }
    }
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Storage(e) => e.into(),
        }
    }
}

impl From<CodecError> for ServerError {
    fn from(err: CodecError) -> Self {
        ServerError::InvalidRequest(err.to_string())
    }
}
