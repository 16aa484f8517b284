//! Shared diff vectors.
//!
//! Each vector pairs two payloads with the exact JSON report the diff
//! endpoint must produce for them. Server and CLI tests both replay these.

use serde::{Deserialize, Serialize};

/// A diff input with its expected report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Left payload.
    pub left: String,
    /// Right payload.
    pub right: String,
    /// Expected report JSON, byte for byte.
    pub expected_json: String,
}

impl DiffVector {
    fn new(id: &str, description: &str, left: &str, right: &str, expected_json: &str) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            left: left.into(),
            right: right.into(),
            expected_json: expected_json.into(),
        }
    }
}

/// The standard set of diff vectors.
pub fn diff_vectors() -> Vec<DiffVector> {
    vec![
        DiffVector::new(
            "equal",
            "identical payloads",
            "AAAA-BBBB-CCCC=",
            "AAAA-BBBB-CCCC=",
            r#"{"Result":"The right and left data are equals."}"#,
        ),
        DiffVector::new(
            "equal_empty",
            "both payloads empty",
            "",
            "",
            r#"{"Result":"The right and left data are equals."}"#,
        ),
        DiffVector::new(
            "length_mismatch",
            "right payload is longer",
            "AAAA",
            "AAAAB",
            r#"{"Result":"The right and left data does not have the same length."}"#,
        ),
        DiffVector::new(
            "one_side_missing",
            "only the left payload was submitted",
            "AAAA",
            "",
            r#"{"Result":"The right and left data does not have the same length."}"#,
        ),
        DiffVector::new(
            "single_run",
            "one differing block in the middle",
            "AAAA-BBBB-CCCC=",
            "AAAA-XXXX-CCCC=",
            r#"{"Result":"The right and left data have the same length, but differences were found.","Differences":[{"Offset":5,"Length":4}]}"#,
        ),
        DiffVector::new(
            "two_runs",
            "differences at both edges",
            "ABCDEF",
            "XBCDEY",
            r#"{"Result":"The right and left data have the same length, but differences were found.","Differences":[{"Offset":0,"Length":1},{"Offset":5,"Length":1}]}"#,
        ),
        DiffVector::new(
            "all_different",
            "every position differs",
            "AAAA",
            "BBBB",
            r#"{"Result":"The right and left data have the same length, but differences were found.","Differences":[{"Offset":0,"Length":4}]}"#,
        ),
    ]
}

/// Returns all vectors as a JSON document.
pub fn all_vectors_json() -> String {
    serde_json::to_string_pretty(&diff_vectors()).expect("vectors serialize")
}
