//! Submit Quote use case
//!
//! Sends one Quote Request to the prediction service and maps the answer
//! onto the form's prediction state.

use crate::ports::price_predictor::{PredictorError, PricePredictor};
use carquote_domain::{DomainError, PredictionState, PriceEstimate, QuoteRequest, QuoteSession};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while submitting a quote
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitQuoteError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Prediction failed: {0}")]
    Predictor(#[from] PredictorError),
}

/// Use case for requesting a price prediction
pub struct SubmitQuoteUseCase<P: PricePredictor + ?Sized> {
    predictor: Arc<P>,
}

impl<P: PricePredictor + ?Sized> Clone for SubmitQuoteUseCase<P> {
    fn clone(&self) -> Self {
        Self {
            predictor: Arc::clone(&self.predictor),
        }
    }
}

impl<P: PricePredictor + ?Sized> SubmitQuoteUseCase<P> {
    pub fn new(predictor: Arc<P>) -> Self {
        Self { predictor }
    }

    /// Validate the request and ask the predictor once.
    ///
    /// An invalid request never reaches the predictor.
    pub async fn execute(&self, request: &QuoteRequest) -> Result<PriceEstimate, SubmitQuoteError> {
        request.validate()?;

        debug!("Sending quote request: {:?}", request);
        let response = self.predictor.predict(request).await?;
        let estimate = PriceEstimate::from(&response);

        match estimate {
            PriceEstimate::Known(price) => info!("Predicted price: {:.2}", price),
            PriceEstimate::Unknown => info!("Prediction response carried no numeric price"),
        }

        Ok(estimate)
    }

    /// Run an already validated request to its settled state.
    ///
    /// Every failure is logged and reported as `Failed`; nothing is retried.
    pub async fn run(&self, request: &QuoteRequest) -> PredictionState {
        Self::outcome(self.execute(request).await)
    }

    /// Map the result of [`execute`](Self::execute) to a settled state
    pub fn outcome(result: Result<PriceEstimate, SubmitQuoteError>) -> PredictionState {
        match result {
            Ok(estimate) => PredictionState::Success(estimate),
            Err(e) => {
                error!("Fetch error: {}", e);
                PredictionState::Failed
            }
        }
    }

    /// Full submit cycle on a session: enter pending, send, settle.
    ///
    /// Returns the rejection when the session refuses to submit (already
    /// pending or invalid request); in that case no request is sent.
    pub async fn submit(&self, session: &mut QuoteSession) -> Result<PredictionState, DomainError> {
        let request = session.begin_submit()?;
        let outcome = self.run(&request).await;
        session.settle(outcome);
        Ok(outcome)
    }
}
