//! Progress indicators for one-shot submissions

pub mod spinner;
