//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Deterministic base64-alphabet payload of `size` bytes.
pub fn payload(size: usize) -> String {
    (0..size)
        .map(|i| ALPHABET[(i * 7 + i / 64) % ALPHABET.len()] as char)
        .collect()
}

/// Copy of `base` with every `stride`-th byte replaced, giving
/// `base.len() / stride` single-byte differences.
pub fn with_differences(base: &str, stride: usize) -> String {
    base.bytes()
        .enumerate()
        .map(|(i, b)| {
            if stride > 0 && i % stride == 0 {
                if b == b'=' { '-' } else { '=' }
            } else {
                b as char
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_deterministic() {
        assert_eq!(payload(100), payload(100));
        assert_eq!(payload(100).len(), 100);
    }

    #[test]
    fn differences_keep_length() {
        let base = payload(64);
        let other = with_differences(&base, 8);
        assert_eq!(base.len(), other.len());
        assert_eq!(base.bytes().zip(other.bytes()).filter(|(a, b)| a != b).count(), 8);
    }
}
