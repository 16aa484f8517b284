//! Transport-neutral responses.

use crate::error::ServerError;
use bindiff_codec::DiffReport;
use serde_json::json;

/// A response ready to be written by any HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl Response {
    /// 204 with no body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// 200 with a diff report body.
    pub fn report(report: &DiffReport) -> Self {
        Self {
            status: 200,
            body: Some(report.to_json()),
        }
    }

    /// Error response, optionally carrying `{"Error": message}`.
    pub fn error(err: &ServerError, with_body: bool) -> Self {
        Self {
            status: err.status(),
            body: with_body.then(|| json!({ "Error": err.to_string() }).to_string()),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
