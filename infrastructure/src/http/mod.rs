//! HTTP adapter for the prediction service

pub mod predictor;

pub use predictor::HttpPricePredictor;
