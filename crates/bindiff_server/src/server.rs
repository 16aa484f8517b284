//! Main diff server.

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handler::RequestHandler;
use crate::response::Response;
use bindiff_core::DiffService;
use bindiff_storage::{PayloadStore, Slot};
use std::sync::Arc;
use tracing::{debug, warn};

/// The diff server.
///
/// Wraps a [`RequestHandler`] and turns every outcome into a [`Response`].
/// An HTTP layer only needs to forward method, path and body to
/// [`DiffServer::route`] and write back the response.
///
/// # Example
///
/// ```
/// use bindiff_server::{DiffServer, ServerConfig};
/// use bindiff_storage::InMemoryStore;
/// use std::sync::Arc;
///
/// let server = DiffServer::new(ServerConfig::default(), Arc::new(InMemoryStore::new()));
/// assert_eq!(server.diff("unknown").status, 404);
/// ```
pub struct DiffServer {
    handler: RequestHandler,
}

impl DiffServer {
    /// Creates a new server over `store`.
    pub fn new(config: ServerConfig, store: Arc<dyn PayloadStore>) -> Self {
        let service = DiffService::new(store);
        Self {
            handler: RequestHandler::new(config, service),
        }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        self.handler.config()
    }

    /// `POST {base}/{id}/left`.
    pub fn left(&self, id: &str, body: &str) -> Response {
        self.respond(self.handler.handle_left(id, body).map(|()| Response::no_content()))
    }

    /// `POST {base}/{id}/right`.
    pub fn right(&self, id: &str, body: &str) -> Response {
        self.respond(self.handler.handle_right(id, body).map(|()| Response::no_content()))
    }

    /// `GET {base}/{id}`.
    pub fn diff(&self, id: &str) -> Response {
        self.respond(self.handler.handle_diff(id).map(|r| Response::report(&r)))
    }

    /// Dispatches a request by method and path.
    pub fn route(&self, method: &str, path: &str, body: &str) -> Response {
        match self.match_route(path) {
            Ok(Route::Diff(id)) if method.eq_ignore_ascii_case("GET") => self.diff(id),
            Ok(Route::Upload(id, slot)) if method.eq_ignore_ascii_case("POST") => {
                self.respond(
                    self.handler
                        .handle_upload(id, slot, body)
                        .map(|()| Response::no_content()),
                )
            }
            Ok(_) => self.respond(Err(ServerError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            })),
            Err(e) => self.respond(Err(e)),
        }
    }

    fn match_route<'a>(&self, path: &'a str) -> Result<Route<'a>, ServerError> {
        let not_found = || ServerError::RouteNotFound(path.to_string());
        let base = self.config().base_path.trim_end_matches('/');

        let rest = path
            .strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(not_found)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = rest.split('/');
        let id = segments.next().unwrap_or_default();
        match (segments.next(), segments.next()) {
            (None, _) => Ok(Route::Diff(id)),
            (Some(slot), None) => {
                let slot: Slot = slot.parse().map_err(|_| not_found())?;
                Ok(Route::Upload(id, slot))
            }
            (Some(_), Some(_)) => Err(not_found()),
        }
    }

    fn respond(&self, outcome: Result<Response, ServerError>) -> Response {
        match outcome {
            Ok(response) => response,
            Err(err) => {
                if err.is_server_error() {
                    warn!(error = %err, "request failed");
                } else {
                    debug!(error = %err, "request rejected");
                }
                Response::error(&err, self.config().error_bodies)
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Diff(&'a str),
    Upload(&'a str, Slot),
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindiff_storage::InMemoryStore;

    fn server() -> DiffServer {
        DiffServer::new(ServerConfig::default(), Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn route_matching() {
        let server = server();
        assert_eq!(server.match_route("/v1/diff/42").unwrap(), Route::Diff("42"));
        assert_eq!(server.match_route("/v1/diff/42/").unwrap(), Route::Diff("42"));
        assert_eq!(
            server.match_route("/v1/diff/42/left").unwrap(),
            Route::Upload("42", Slot::Left)
        );
        assert_eq!(
            server.match_route("/v1/diff/42/RIGHT").unwrap(),
            Route::Upload("42", Slot::Right)
        );
        assert!(server.match_route("/v1/diff/42/middle").is_err());
        assert!(server.match_route("/v1/diff/42/left/extra").is_err());
        assert!(server.match_route("/v2/diff/42").is_err());
        assert!(server.match_route("/v1/diffs/42").is_err());
    }

    #[test]
    fn full_flow() {
        let server = server();
        assert_eq!(server.route("POST", "/v1/diff/1/left", r#"["LucasRosaCruz"]"#).status, 204);
        assert_eq!(server.route("POST", "/v1/diff/1/right", r#"["LucasRosaCruz"]"#).status, 204);

        let response = server.route("GET", "/v1/diff/1", "");
        assert_eq!(response.status, 200);
        assert_eq!(
            response.body.unwrap(),
            r#"{"Result":"The right and left data are equals."}"#
        );
    }

    #[test]
    fn wrong_method() {
        let server = server();
        assert_eq!(server.route("GET", "/v1/diff/1/left", "").status, 405);
        assert_eq!(server.route("POST", "/v1/diff/1", "[]").status, 405);
        assert_eq!(server.route("DELETE", "/v1/diff/1", "").status, 405);
    }

    #[test]
    fn unknown_route() {
        assert_eq!(server().route("GET", "/health", "").status, 404);
    }

    #[test]
    fn empty_id_in_path() {
        let server = server();
        assert_eq!(server.route("POST", "/v1/diff//left", r#"["A"]"#).status, 400);
        assert_eq!(server.route("GET", "/v1/diff/", "").status, 400);
    }

    #[test]
    fn invalid_body_is_bad_request() {
        let response = server().route("POST", "/v1/diff/1/left", "not json");
        assert_eq!(response.status, 400);
        assert!(response.body.unwrap().contains("invalid payload envelope"));
    }
}
