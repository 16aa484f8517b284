//! # bindiff Storage
//!
//! Payload store trait and implementations for bindiff.
//!
//! A store maps a request id to a record holding two named slots, `left`
//! and `right`. Slots are written one at a time and read together.
//!
//! ## Design Principles
//!
//! - A record always has both slots; an unwritten slot is the empty string
//! - `put` is a single upsert: create-if-absent and set-one-slot together
//! - A failed `put` leaves the previous record untouched
//! - Stores must be `Send + Sync` so request handlers can share them
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - For testing and ephemeral use
//! - [`FileStore`] - One file per request id in a store directory
//!
//! ## Example
//!
//! ```rust
//! use bindiff_storage::{InMemoryStore, PayloadStore, Slot};
//!
//! let store = InMemoryStore::new();
//! store.put("42", Slot::Left, "AAAA").unwrap();
//! assert_eq!(store.get("42").unwrap(), ("AAAA".to_string(), String::new()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod memory;
mod record;
mod slot;
mod store;

pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use record::RequestRecord;
pub use slot::Slot;
pub use store::{validate_id, PayloadStore};
