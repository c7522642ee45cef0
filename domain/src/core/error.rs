//! Domain error types

use crate::quote::field::QuoteField;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Please fill out: {}", join_keys(.0))]
    MissingFields(Vec<QuoteField>),

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: QuoteField, value: String },

    #[error("{value:?} is not a valid {field}")]
    InvalidOption { field: QuoteField, value: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("A prediction is already in progress")]
    AlreadyPending,
}

impl DomainError {
    /// The field the user should fix first, if the error points at one
    pub fn field(&self) -> Option<QuoteField> {
        match self {
            DomainError::MissingFields(fields) => fields.first().copied(),
            DomainError::NotANumber { field, .. } | DomainError::InvalidOption { field, .. } => {
                Some(*field)
            }
            DomainError::UnknownField(_) | DomainError::AlreadyPending => None,
        }
    }
}

fn join_keys(fields: &[QuoteField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
