//! Quote subdomain: the vehicle attributes sent to the prediction service
//! and the answer it gives back.
//!
//! - [`field::QuoteField`]: the thirteen fixed field names
//! - [`options`]: the fixed enumerations of the categorical fields
//! - [`request::QuoteRequest`]: one vehicle's attributes
//! - [`response::QuoteResponse`]: the predicted price

pub mod field;
pub mod options;
pub mod request;
pub mod response;
