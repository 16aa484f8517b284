//! Base64 conversion between raw binary data and payload strings.

use crate::error::{CodecError, CodecResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encodes raw bytes as a standard base64 payload string.
pub fn encode_binary(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes a standard base64 payload string into raw bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] if the input is not valid base64.
pub fn decode_binary(text: &str) -> CodecResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CodecError::invalid_base64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_vector() {
        assert_eq!(encode_binary(b"hello"), "aGVsbG8=");
        assert_eq!(decode_binary("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn rejects_invalid_alphabet() {
        assert!(matches!(
            decode_binary("not*base64"),
            Err(CodecError::InvalidBase64 { .. })
        ));
    }

    proptest! {
        #[test]
        fn equal_length_inputs_encode_to_equal_length(
            a in prop::collection::vec(any::<u8>(), 0..64),
        ) {
            let b: Vec<u8> = a.iter().map(|x| x.wrapping_add(1)).collect();
            prop_assert_eq!(encode_binary(&a).len(), encode_binary(&b).len());
        }
    }
}
