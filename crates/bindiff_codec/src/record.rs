//! On-disk record encoding.
//!
//! A stored record is a CBOR map with four fields:
//!
//! ```text
//! { "v": <format version>, "id": <request id>, "left": <text>, "right": <text> }
//! ```
//!
//! The format version is checked on decode so that a newer layout is
//! rejected rather than misread.

use crate::error::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};

/// Current record format version.
pub const FORMAT_VERSION: u16 = 1;

/// The serialized form of a request record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFrame {
    /// Format version the frame was written with.
    #[serde(rename = "v")]
    pub version: u16,
    /// Request id the record belongs to.
    pub id: String,
    /// Left slot content.
    pub left: String,
    /// Right slot content.
    pub right: String,
}

impl RecordFrame {
    /// Creates a frame at the current format version.
    pub fn new(id: impl Into<String>, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            id: id.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Encodes a record frame to CBOR bytes.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if serialization fails.
pub fn encode_record(frame: &RecordFrame) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(frame.left.len() + frame.right.len() + frame.id.len() + 32);
    ciborium::ser::into_writer(frame, &mut buf)
        .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    Ok(buf)
}

/// Decodes a record frame from CBOR bytes.
///
/// # Errors
///
/// Returns [`CodecError::DecodingFailed`] for malformed bytes and
/// [`CodecError::UnsupportedVersion`] for frames from another format version.
pub fn decode_record(bytes: &[u8]) -> CodecResult<RecordFrame> {
    let frame: RecordFrame = ciborium::de::from_reader(bytes)
        .map_err(|e| CodecError::decoding_failed(e.to_string()))?;

    if frame.version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            expected: FORMAT_VERSION,
            found: frame.version,
        });
    }

    Ok(frame)
}
