//! Price Predictor port
//!
//! Defines the interface for asking the prediction service for a price.

use async_trait::async_trait;
use carquote_domain::{QuoteRequest, QuoteResponse};
use thiserror::Error;

/// Errors that can occur while requesting a prediction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    /// The service answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request could not be completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered successfully but the body was not JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Source of price predictions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    /// Send one Quote Request and return the decoded Quote Response
    async fn predict(&self, request: &QuoteRequest) -> Result<QuoteResponse, PredictorError>;
}
