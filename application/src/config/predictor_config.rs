//! Prediction service parameters

use std::time::Duration;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Connection parameters for the prediction service.
///
/// No timeout by default: a request is awaited until the service answers
/// or the connection fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Full URL of the predict endpoint
    pub endpoint: String,
    /// Upper bound on one request, `None` to wait indefinitely
    pub timeout: Option<Duration>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl PredictorConfig {
    // ==================== Builder Methods ====================

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
