//! Prediction lifecycle and how its result is displayed

pub mod state;
