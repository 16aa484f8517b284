//! # bindiff Server
//!
//! Request handling for the bindiff diff API, independent of any HTTP
//! library.
//!
//! This crate provides:
//! - Upload endpoints for the left and right payloads
//! - The diff endpoint returning a JSON report
//! - Status-code mapping for every failure kind
//! - A small router over method + path
//!
//! # Endpoints
//!
//! | Method | Path                  | Success                  |
//! |--------|-----------------------|--------------------------|
//! | POST   | `/v1/diff/{id}/left`  | 204, no body             |
//! | POST   | `/v1/diff/{id}/right` | 204, no body             |
//! | GET    | `/v1/diff/{id}`       | 200, JSON [`DiffReport`] |
//!
//! Upload bodies are JSON arrays of string chunks which are concatenated
//! into a single payload.
//!
//! ```rust
//! use bindiff_server::{DiffServer, ServerConfig};
//! use bindiff_storage::InMemoryStore;
//! use std::sync::Arc;
//!
//! let server = DiffServer::new(ServerConfig::default(), Arc::new(InMemoryStore::new()));
//! assert_eq!(server.route("POST", "/v1/diff/1/left", r#"["AAAA"]"#).status, 204);
//! assert_eq!(server.route("POST", "/v1/diff/1/right", r#"["AAAA"]"#).status, 204);
//! let response = server.route("GET", "/v1/diff/1", "");
//! assert_eq!(response.status, 200);
//! ```
//!
//! [`DiffReport`]: bindiff_codec::DiffReport

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect()
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod response;
mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::RequestHandler;
pub use response::Response;
pub use server::DiffServer;
