//! Request handlers for the diff endpoints.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use bindiff_codec::{decode_envelope, DiffReport};
use bindiff_core::DiffService;
use bindiff_storage::Slot;
use tracing::{debug, info};

/// Handler for diff API requests.
pub struct RequestHandler {
    config: ServerConfig,
    service: DiffService,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(config: ServerConfig, service: DiffService) -> Self {
        Self { config, service }
    }

    /// Returns the handler configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handles an upload of the left payload.
    pub fn handle_left(&self, id: &str, body: &str) -> ServerResult<()> {
        self.handle_upload(id, Slot::Left, body)
    }

    /// Handles an upload of the right payload.
    pub fn handle_right(&self, id: &str, body: &str) -> ServerResult<()> {
        self.handle_upload(id, Slot::Right, body)
    }

    /// Validates the id and envelope, then stores the payload in `slot`.
    pub fn handle_upload(&self, id: &str, slot: Slot, body: &str) -> ServerResult<()> {
        if id.is_empty() {
            return Err(ServerError::InvalidRequest("request id is empty".into()));
        }

        let payload = decode_envelope(body)?;
        if payload.len() > self.config.max_payload_len {
            return Err(ServerError::PayloadTooLarge {
                len: payload.len(),
                max: self.config.max_payload_len,
            });
        }
        debug!(id, %slot, len = payload.len(), "decoded payload");

        self.service.submit(id, slot, &payload)?;
        info!(id, %slot, "stored payload");
        Ok(())
    }

    /// Handles a diff request.
    pub fn handle_diff(&self, id: &str) -> ServerResult<DiffReport> {
        if id.is_empty() {
            return Err(ServerError::InvalidRequest("request id is empty".into()));
        }

        let result = self.service.diff_request(id)?;
        info!(id, result = result.label(), "computed diff");
        Ok(result.to_report())
    }
}
