//! Server configuration.

/// Default limit on a decoded payload, in bytes.
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

/// Configuration for the diff API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path prefix the endpoints live under.
    pub base_path: String,
    /// Largest accepted payload after chunk concatenation, in bytes.
    pub max_payload_len: usize,
    /// Whether error responses carry a JSON body describing the error.
    pub error_bodies: bool,
}

impl ServerConfig {
    /// Creates a configuration serving under `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            error_bodies: true,
        }
    }

    /// Sets the maximum payload length.
    pub fn with_max_payload_len(mut self, max: usize) -> Self {
        self.max_payload_len = max;
        self
    }

    /// Sets whether error responses carry a body.
    pub fn with_error_bodies(mut self, enabled: bool) -> Self {
        self.error_bodies = enabled;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("/v1/diff")
    }
}
