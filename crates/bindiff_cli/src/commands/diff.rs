//! Diff command implementation.

use crate::error::CliResult;
use bindiff_core::{DiffResult, DiffService};
use bindiff_storage::PayloadStore;
use std::io::Write;
use std::sync::Arc;

/// Runs the diff command.
///
/// `json` prints the report exactly as the diff endpoint returns it.
pub fn run(
    store: Arc<dyn PayloadStore>,
    id: &str,
    format: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let service = DiffService::new(store);
    let result = service.diff_request(id)?;

    match format {
        "json" => writeln!(out, "{}", result.to_report().to_json())?,
        _ => print_text_output(&result, out)?,
    }
    Ok(())
}

fn print_text_output(result: &DiffResult, out: &mut dyn Write) -> CliResult<()> {
    writeln!(out, "{}", result.label())?;
    for run in result.runs() {
        writeln!(out, "  offset {:>8}  length {:>8}", run.offset, run.length)?;
    }
    if let DiffResult::SameLengthWithDiffs(runs) = result {
        let total: usize = runs.iter().map(|r| r.length).sum();
        writeln!(out, "{} run(s), {total} differing position(s)", runs.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindiff_core::CoreError;
    use bindiff_storage::{InMemoryStore, Slot};

    fn store_with(left: &str, right: &str) -> Arc<dyn PayloadStore> {
        let store = InMemoryStore::new();
        store.put("1", Slot::Left, left).unwrap();
        store.put("1", Slot::Right, right).unwrap();
        Arc::new(store)
    }

    fn output(store: Arc<dyn PayloadStore>, format: &str) -> String {
        let mut out = Vec::new();
        run(store, "1", format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_equal() {
        let text = output(store_with("AAAA", "AAAA"), "text");
        assert_eq!(text, "The right and left data are equals.\n");
    }

    #[test]
    fn text_lists_runs() {
        let text = output(store_with("ABCDEF", "XBCDYY"), "text");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "The right and left data have the same length, but differences were found."
        );
        assert!(lines[1].contains("offset        0"));
        assert!(lines[2].contains("offset        4"));
        assert!(lines[2].contains("length        2"));
        assert_eq!(lines[3], "2 run(s), 3 differing position(s)");
    }

    #[test]
    fn json_is_wire_report() {
        let json = output(store_with("AAAA", "AAA"), "json");
        assert_eq!(
            json.trim_end(),
            r#"{"Result":"The right and left data does not have the same length."}"#
        );
    }

    #[test]
    fn missing_request() {
        let err = run(Arc::new(InMemoryStore::new()), "1", "text", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, crate::error::CliError::Core(CoreError::Storage(_))));
    }
}
