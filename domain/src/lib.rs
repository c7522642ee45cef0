//! Domain layer for carquote
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote Request / Quote Response
//!
//! A Quote Request maps thirteen fixed field names to string values and is
//! sent to a prediction service, which answers with a Quote Response
//! carrying the predicted price in dollars.
//!
//! ## Prediction state
//!
//! The form moves through `Idle → Pending → Success | Failed`, modelled as
//! one tagged enum ([`PredictionState`]) owned by a [`QuoteSession`].

pub mod core;
pub mod prediction;
pub mod quote;
pub mod session;

// Re-export commonly used types
pub use core::error::DomainError;
pub use prediction::state::{BUSY_LABEL, PredictionState, PriceEstimate, SUBMIT_LABEL};
pub use quote::{
    field::{FieldKind, QuoteField},
    options::{SelectOption, allowed_values, option_label, select_options},
    request::{QuoteRequest, is_number},
    response::QuoteResponse,
};
pub use session::QuoteSession;
