//! reqwest-backed Price Predictor

use async_trait::async_trait;
use carquote_application::{PredictorConfig, PredictorError, PricePredictor};
use carquote_domain::{QuoteRequest, QuoteResponse};
use tracing::{debug, info, warn};

/// Price Predictor that POSTs Quote Requests as JSON to a fixed endpoint
pub struct HttpPricePredictor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPricePredictor {
    /// Create a predictor for the configured endpoint
    pub fn new(config: &PredictorConfig) -> Result<Self, PredictorError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        info!("HttpPricePredictor initialized for {}", config.endpoint);

        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    /// Create a predictor with an existing client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PricePredictor for HttpPricePredictor {
    async fn predict(&self, request: &QuoteRequest) -> Result<QuoteResponse, PredictorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("POST {} -> {}", self.endpoint, status);
        if !status.is_success() {
            return Err(PredictorError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PredictorError::Transport(format!("Failed to read response body: {}", e)))?;

        parse_body(&bytes)
    }
}

/// Decode a success body.
///
/// Anything that is not JSON is an error; JSON that is not an object carries
/// no price and decodes to an empty response.
fn parse_body(bytes: &[u8]) -> Result<QuoteResponse, PredictorError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| PredictorError::InvalidBody(e.to_string()))?;

    if !value.is_object() {
        warn!("Prediction response is not a JSON object: {}", value);
        return Ok(QuoteResponse::default());
    }

    serde_json::from_value(value).map_err(|e| PredictorError::InvalidBody(e.to_string()))
}
