//! List command implementation.

use crate::error::CliResult;
use bindiff_storage::PayloadStore;
use std::io::Write;

/// Runs the list command.
pub fn run(store: &dyn PayloadStore, format: &str, out: &mut dyn Write) -> CliResult<()> {
    let ids = store.ids()?;
    match format {
        "json" => writeln!(out, "{}", serde_json::to_string(&ids)?)?,
        _ => {
            for id in &ids {
                writeln!(out, "{id}")?;
            }
        }
    }
    Ok(())
}
