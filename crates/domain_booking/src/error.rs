//! Booking domain errors
//!
//! Date, field and amount errors are recoverable: the caller re-prompts the
//! guest with corrected input. Retrying with unchanged input reproduces the
//! same error. `QuoteMismatch` is a caller bug.

use core_kernel::MoneyError;
use thiserror::Error;

use crate::form::{FieldIssue, FormField};
use crate::stay::InvalidDateRange;

/// Errors that can occur in the booking domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Checkout is not after checkin, or a date is missing or unparsable
    #[error("Invalid date range: {0}")]
    InvalidDateRange(#[from] InvalidDateRange),

    /// A required form field is missing or malformed
    #[error("Validation error on {field}: {issue}")]
    Validation {
        field: FormField,
        issue: FieldIssue,
    },

    /// A negative rate, fee or night count was supplied
    #[error("{quantity} must not be negative, got {value}")]
    NonNegativeConstraintViolation {
        quantity: String,
        value: String,
    },

    /// The quote was priced for a different number of nights than the stay
    #[error("Quote covers {quote_nights} nights but the stay is {stay_nights}")]
    QuoteMismatch {
        stay_nights: u32,
        quote_nights: u32,
    },

    /// Money arithmetic failed (currency mismatch, overflow)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl BookingError {
    /// Creates a validation error for a field that was left empty
    pub fn missing(field: FormField) -> Self {
        BookingError::Validation {
            field,
            issue: FieldIssue::Missing,
        }
    }

    /// Creates a validation error for a field that was filled in wrongly
    pub fn malformed(field: FormField) -> Self {
        BookingError::Validation {
            field,
            issue: FieldIssue::Malformed,
        }
    }

    /// Creates a non-negative constraint violation
    pub fn negative(quantity: impl Into<String>, value: impl std::fmt::Display) -> Self {
        BookingError::NonNegativeConstraintViolation {
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Returns the offending form field for validation errors
    pub fn field(&self) -> Option<FormField> {
        match self {
            BookingError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
