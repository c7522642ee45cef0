//! Application-level configuration.
//!
//! - [`PredictorConfig`]: where the prediction service lives and how long to wait for it

pub mod predictor_config;

pub use predictor_config::{DEFAULT_ENDPOINT, PredictorConfig};
