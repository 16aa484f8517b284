//! # bindiff Codec
//!
//! Encoding and decoding for everything bindiff puts on disk or on the wire.
//!
//! This crate provides:
//! - [`RecordFrame`]: the CBOR on-disk form of a request record
//! - [`decode_envelope`]: the JSON list-of-chunks payload format clients submit
//! - [`DiffReport`]: the JSON response body for a diff request
//! - Base64 helpers for turning raw binary data into payload strings
//!
//! ## Usage
//!
//! ```
//! use bindiff_codec::{decode_envelope, encode_envelope};
//!
//! let body = encode_envelope(&["AAAA", "BBBB"]);
//! let payload = decode_envelope(&body).unwrap();
//! assert_eq!(payload, "AAAABBBB");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod binary;
mod envelope;
mod error;
mod record;
mod report;

pub use binary::{decode_binary, encode_binary};
pub use envelope::{decode_envelope, encode_envelope};
pub use error::{CodecError, CodecResult};
pub use record::{decode_record, encode_record, RecordFrame, FORMAT_VERSION};
pub use report::{DiffReport, ReportRun};
