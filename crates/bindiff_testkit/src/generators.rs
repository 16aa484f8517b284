//! Property-based test generators using proptest.
//!
//! Provides strategies for generating payloads, request ids and
//! envelopes that exercise the diff engine and the stores.

use bindiff_storage::Slot;
use proptest::prelude::*;

/// Strategy for generating non-empty request ids.
pub fn request_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{1,24}").expect("Invalid regex")
}

/// Strategy for generating base64-looking payloads.
pub fn payload_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+/]{0,256}={0,2}").expect("Invalid regex")
}

/// Strategy for generating a slot.
pub fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![Just(Slot::Left), Just(Slot::Right)]
}

/// Strategy for generating two payloads of equal length over a small
/// alphabet, so that both matching and differing positions are common.
pub fn same_length_pair_strategy() -> impl Strategy<Value = (String, String)> {
    (0usize..128).prop_flat_map(|len| {
        let side = || prop::collection::vec(prop::sample::select(vec!['A', 'B', '=']), len);
        (side(), side()).prop_map(|(l, r)| (l.into_iter().collect(), r.into_iter().collect()))
    })
}

/// Strategy for splitting a payload into the chunk list of an envelope.
pub fn chunked_strategy(payload: String) -> impl Strategy<Value = Vec<String>> {
    let len = payload.len();
    prop::collection::vec(0..=len, 0..4).prop_map(move |mut cuts| {
        cuts.push(0);
        cuts.push(len);
        cuts.sort_unstable();
        cuts.dedup();
        cuts.windows(2)
            .map(|w| payload[w[0]..w[1]].to_string())
            .collect()
    })
}

/// A single store operation.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Write a payload to one slot.
    Put {
        /// Request id.
        id: String,
        /// Target slot.
        slot: Slot,
        /// Payload text.
        content: String,
    },
    /// Read both slots.
    Get {
        /// Request id.
        id: String,
    },
}

/// Strategy for generating store operations over a small id space.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    let id = prop::sample::select(vec!["a", "b", "c"]).prop_map(str::to_string);
    prop_oneof![
        3 => (id.clone(), slot_strategy(), payload_strategy())
            .prop_map(|(id, slot, content)| StoreOperation::Put { id, slot, content }),
        1 => id.prop_map(|id| StoreOperation::Get { id }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn request_ids_are_not_empty(id in request_id_strategy()) {
            prop_assert!(!id.is_empty());
        }

        #[test]
        fn pairs_have_equal_length((left, right) in same_length_pair_strategy()) {
            prop_assert_eq!(left.len(), right.len());
        }

        #[test]
        fn chunks_concatenate_to_payload(
            (payload, chunks) in payload_strategy()
                .prop_flat_map(|p| (Just(p.clone()), chunked_strategy(p)))
        ) {
            prop_assert_eq!(chunks.concat(), payload);
        }
    }
}
