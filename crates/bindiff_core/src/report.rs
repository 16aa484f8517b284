//! Human-readable labels and the JSON report for a diff result.

use crate::diff::{DiffResult, DiffRun};
use bindiff_codec::{DiffReport, ReportRun};

/// Label for [`DiffResult::Equal`].
pub const LABEL_EQUAL: &str = "The right and left data are equals.";

/// Label for [`DiffResult::LengthMismatch`].
pub const LABEL_LENGTH_MISMATCH: &str = "The right and left data does not have the same length.";

/// Label for [`DiffResult::SameLengthWithDiffs`].
pub const LABEL_SAME_LENGTH_WITH_DIFFS: &str =
    "The right and left data have the same length, but differences were found.";

impl DiffResult {
    /// Returns the human-readable label for this classification.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DiffResult::Equal => LABEL_EQUAL,
            DiffResult::LengthMismatch => LABEL_LENGTH_MISMATCH,
            DiffResult::SameLengthWithDiffs(_) => LABEL_SAME_LENGTH_WITH_DIFFS,
        }
    }

    /// Builds the response report for this result.
    #[must_use]
    pub fn to_report(&self) -> DiffReport {
        DiffReport::from(self)
    }
}

impl From<DiffRun> for ReportRun {
    fn from(run: DiffRun) -> Self {
        ReportRun {
            offset: run.offset,
            length: run.length,
        }
    }
}

impl From<&DiffResult> for DiffReport {
    fn from(result: &DiffResult) -> Self {
        let differences = match result {
            DiffResult::SameLengthWithDiffs(runs) => {
                Some(runs.iter().copied().map(ReportRun::from).collect())
            }
            DiffResult::Equal | DiffResult::LengthMismatch => None,
        };
        DiffReport {
            result: result.label().to_string(),
            differences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;

    #[test]
    fn equal_report_has_no_differences() {
        let report = diff("same", "same").to_report();
        assert_eq!(report.result, LABEL_EQUAL);
        assert!(report.differences.is_none());
    }

    #[test]
    fn length_mismatch_report() {
        let report = diff("short", "longer").to_report();
        assert_eq!(report.result, LABEL_LENGTH_MISMATCH);
        assert!(report.differences.is_none());
    }

    #[test]
    fn differences_report_json() {
        let report = diff("ABCDEFGH-IJKLMNOP-QRSTUVZ=", "AAADEFGH-IIIIIIIP-QRSTUUUU").to_report();
        assert_eq!(
            report.to_json(),
            concat!(
                r#"{"Result":"The right and left data have the same length, "#,
                r#"but differences were found.","Differences":["#,
                r#"{"Offset":1,"Length":2},{"Offset":10,"Length":6},{"Offset":23,"Length":3}]}"#
            )
        );
    }
}
