//! Show command implementation.

use crate::error::CliResult;
use bindiff_storage::PayloadStore;
use serde::Serialize;
use std::io::Write;

/// Stored payloads of one request.
#[derive(Debug, Serialize)]
pub struct ShowResult<'a> {
    /// Request id.
    pub id: &'a str,
    /// Left payload.
    pub left: String,
    /// Right payload.
    pub right: String,
}

/// Runs the show command.
pub fn run(
    store: &dyn PayloadStore,
    id: &str,
    format: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let (left, right) = store.get(id)?;
    let result = ShowResult { id, left, right };

    match format {
        "json" => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        _ => {
            writeln!(out, "id:    {}", result.id)?;
            writeln!(out, "left:  {} ({} bytes)", result.left, result.left.len())?;
            writeln!(out, "right: {} ({} bytes)", result.right, result.right.len())?;
        }
    }
    Ok(())
}
