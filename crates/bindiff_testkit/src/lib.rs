//! # bindiff Testkit
//!
//! Test utilities for bindiff.
//!
//! This crate provides:
//! - Store fixtures with automatic cleanup
//! - Property-based test generators using proptest
//! - Shared diff vectors with their expected reports
//! - Concurrent submission stress helpers
//!
//! ## Usage
//!
//! ```rust
//! use bindiff_testkit::prelude::*;
//!
//! with_memory_service(|service| {
//!     let id = unique_id();
//!     service.submit(&id, Slot::Left, "AAAA").unwrap();
//!     service.submit(&id, Slot::Right, "AAAA").unwrap();
//!     assert!(service.diff_request(&id).unwrap().is_equal());
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
    pub use bindiff_storage::Slot;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
pub use vectors::*;
