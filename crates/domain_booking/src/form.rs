//! Booking form fields
//!
//! Raw customer and payment values as the guest typed them. They are plain
//! strings; [`FormField::ORDER`] fixes the order in which they are checked
//! so the guest is always pointed at the same first problem.
//!
//! # Validation Rules
//!
//! - Every field is required; blank or whitespace-only counts as missing
//! - Email must also look like an address (`validator`'s email rule)

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use crate::error::BookingError;

/// A required booking form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Street,
    City,
    State,
    Zip,
    Country,
    CardNumber,
    Expiry,
    Cvv,
}

impl FormField {
    /// The order fields are validated in
    pub const ORDER: [FormField; 12] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Street,
        FormField::City,
        FormField::State,
        FormField::Zip,
        FormField::Country,
        FormField::CardNumber,
        FormField::Expiry,
        FormField::Cvv,
    ];

    /// Name of the field as the booking form posts it
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Street => "street",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Zip => "zip",
            FormField::Country => "country",
            FormField::CardNumber => "cardNumber",
            FormField::Expiry => "expiry",
            FormField::Cvv => "cvv",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIssue {
    Missing,
    Malformed,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing => f.write_str("field is required"),
            FieldIssue::Malformed => f.write_str("field is malformed"),
        }
    }
}

/// Billing address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Guest contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressFields,
}

/// Card details
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentFields {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Debug for PaymentFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentFields")
            .field("card_number", &self.masked_card_number())
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}

impl PaymentFields {
    /// Card number with all but the last four digits hidden
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let visible = digits.len().min(4);
        let last: String = digits[digits.len() - visible..].iter().collect();
        format!("**** **** **** {}", last)
    }
}

/// Customer and payment fields read together, in validation order
pub(crate) struct FormData<'a> {
    pub customer: &'a CustomerFields,
    pub payment: &'a PaymentFields,
}

impl FormData<'_> {
    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.customer.first_name,
            FormField::LastName => &self.customer.last_name,
            FormField::Email => &self.customer.email,
            FormField::Phone => &self.customer.phone,
            FormField::Street => &self.customer.address.street,
            FormField::City => &self.customer.address.city,
            FormField::State => &self.customer.address.state,
            FormField::Zip => &self.customer.address.zip,
            FormField::Country => &self.customer.address.country,
            FormField::CardNumber => &self.payment.card_number,
            FormField::Expiry => &self.payment.expiry,
            FormField::Cvv => &self.payment.cvv,
        }
    }

    /// Returns the first problem found, walking [`FormField::ORDER`]
    pub fn first_issue(&self) -> Option<BookingError> {
        FormField::ORDER.iter().find_map(|&field| {
            let value = self.value(field).trim();
            if value.is_empty() {
                Some(BookingError::missing(field))
            } else if field == FormField::Email && !value.to_string().validate_email() {
                Some(BookingError::malformed(field))
            } else {
                None
            }
        })
    }
}
