//! Route command implementation.

use crate::error::{CliError, CliResult};
use bindiff_server::{DiffServer, ServerConfig};
use bindiff_storage::PayloadStore;
use std::io::Write;
use std::sync::Arc;

/// Runs the route command: prints the status line, then the body if any.
///
/// A non-2xx response is reported as an error after printing.
pub fn run(
    store: Arc<dyn PayloadStore>,
    method: &str,
    path: &str,
    body: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let server = DiffServer::new(ServerConfig::default(), store);
    let response = server.route(method, path, body);

    writeln!(out, "{}", response.status)?;
    if let Some(body) = &response.body {
        writeln!(out, "{body}")?;
    }

    if response.is_success() {
        Ok(())
    } else {
        Err(CliError::RequestFailed(response.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindiff_storage::InMemoryStore;

    #[test]
    fn upload_then_diff() {
        let store: Arc<dyn PayloadStore> = Arc::new(InMemoryStore::new());
        let mut out = Vec::new();

        run(Arc::clone(&store), "POST", "/v1/diff/9/left", r#"["AB"]"#, &mut out).unwrap();
        run(Arc::clone(&store), "POST", "/v1/diff/9/right", r#"["AC"]"#, &mut out).unwrap();
        run(store, "GET", "/v1/diff/9", "", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "204");
        assert_eq!(lines[1], "204");
        assert_eq!(lines[2], "200");
        assert!(lines[3].contains(r#""Differences":[{"Offset":1,"Length":1}]"#));
    }

    #[test]
    fn failure_prints_then_errors() {
        let mut out = Vec::new();
        let err = run(Arc::new(InMemoryStore::new()), "GET", "/v1/diff/9", "", &mut out)
            .unwrap_err();

        assert!(matches!(err, CliError::RequestFailed(404)));
        assert!(String::from_utf8(out).unwrap().starts_with("404\n"));
    }
}
