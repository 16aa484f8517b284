//! # bindiff Core
//!
//! Diff engine and diff service for bindiff.
//!
//! This crate provides:
//! - [`diff`]: classifies two payloads and extracts their difference runs
//! - [`DiffService`]: reads both slots of a request from a
//!   [`bindiff_storage::PayloadStore`] and diffs them
//! - Conversion of a [`DiffResult`] into the JSON [`bindiff_codec::DiffReport`]
//!
//! ## Example
//!
//! ```
//! use bindiff_core::{diff, DiffResult, DiffRun};
//!
//! let result = diff("ABCD", "AXXD");
//! assert_eq!(result, DiffResult::SameLengthWithDiffs(vec![DiffRun::new(1, 2)]));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod diff;
mod error;
mod report;
mod service;

pub use diff::{diff, diff_slices, DiffResult, DiffRun};
pub use error::{CoreError, CoreResult};
pub use report::{LABEL_EQUAL, LABEL_LENGTH_MISMATCH, LABEL_SAME_LENGTH_WITH_DIFFS};
pub use service::DiffService;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
