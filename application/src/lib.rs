//! Application layer for carquote
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ENDPOINT, PredictorConfig};
pub use ports::price_predictor::{PredictorError, PricePredictor};
pub use use_cases::submit_quote::{SubmitQuoteError, SubmitQuoteUseCase};
