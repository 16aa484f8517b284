//! JSON response body for a diff request.

use serde::{Deserialize, Serialize};

/// The body returned for a diff request.
///
/// `Result` is always a single string. `Differences` is present only when
/// the payloads have the same length but differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Human-readable classification.
    #[serde(rename = "Result")]
    pub result: String,
    /// Difference runs, in ascending offset order.
    #[serde(
        rename = "Differences",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub differences: Option<Vec<ReportRun>>,
}

/// One difference run in a [`DiffReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRun {
    /// Position of the first differing unit.
    #[serde(rename = "Offset")]
    pub offset: usize,
    /// Number of consecutive differing units.
    #[serde(rename = "Length")]
    pub length: usize,
}

impl DiffReport {
    /// Serializes the report as compact JSON.
    pub fn to_json(&self) -> String {
        // Only strings and integers: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omits_differences_when_absent() {
        let report = DiffReport {
            result: "The right and left data are equals.".into(),
            differences: None,
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value, json!({ "Result": "The right and left data are equals." }));
    }

    #[test]
    fn uses_capitalized_field_names() {
        let report = DiffReport {
            result: "x".into(),
            differences: Some(vec![ReportRun {
                offset: 1,
                length: 2,
            }]),
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(
            value,
            json!({ "Result": "x", "Differences": [ { "Offset": 1, "Length": 2 } ] })
        );
    }

    #[test]
    fn parses_back() {
        let text = r#"{"Result":"r","Differences":[{"Offset":10,"Length":6}]}"#;
        let report: DiffReport = serde_json::from_str(text).unwrap();
        assert_eq!(report.differences.unwrap()[0].offset, 10);
    }
}
