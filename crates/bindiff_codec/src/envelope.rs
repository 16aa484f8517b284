//! The payload envelope clients submit.
//!
//! A payload arrives as a JSON array of string chunks. The chunks are
//! concatenated in order to form the single payload string that is stored.

use crate::error::{CodecError, CodecResult};
use serde_json::Value;

/// Decodes a JSON chunk list into one payload string.
///
/// An empty array yields an empty payload.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEnvelope`] if the input is not valid JSON,
/// is not an array, or contains a non-string element. Chunks such as `42`
/// are rejected rather than stringified.
pub fn decode_envelope(input: &str) -> CodecResult<String> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| CodecError::invalid_envelope(e.to_string()))?;

    let Value::Array(chunks) = value else {
        return Err(CodecError::invalid_envelope("expected a JSON array"));
    };

    let mut payload = String::new();
    for (index, chunk) in chunks.iter().enumerate() {
        match chunk {
            Value::String(text) => payload.push_str(text),
            other => {
                return Err(CodecError::invalid_envelope(format!(
                    "chunk {index} is not a string: {other}"
                )))
            }
        }
    }

    Ok(payload)
}

/// Encodes chunks as a JSON array envelope.
pub fn encode_envelope<S: AsRef<str>>(chunks: &[S]) -> String {
    let values: Vec<Value> = chunks
        .iter()
        .map(|c| Value::String(c.as_ref().to_string()))
        .collect();
    Value::Array(values).to_string()
}
