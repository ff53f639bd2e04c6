//! Booking summary
//!
//! The record shown on the confirmation view once the guest submits the
//! form. It is assembled in one step and has no setters. Building again
//! from corrected fields yields a separate summary.

use tracing::debug;

use crate::error::BookingError;
use crate::form::{AddressFields, CustomerFields, FormData, PaymentFields};
use crate::quote::StayQuote;
use crate::stay::StayDates;

/// An immutable, fully validated booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    property_name: String,
    stay: StayDates,
    quote: StayQuote,
    customer: CustomerFields,
    payment: PaymentFields,
}

impl BookingSummary {
    /// Assembles a booking from the priced stay and the submitted form
    ///
    /// Fields are checked in [`FormField::ORDER`](crate::FormField::ORDER)
    /// and the first problem is reported. Stored values are trimmed.
    ///
    /// No payment is taken and nothing is persisted here; that is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// - `QuoteMismatch` when the quote's nights differ from the stay's
    /// - `Validation` naming the first missing or malformed field
    pub fn build(
        property_name: impl Into<String>,
        stay: StayDates,
        quote: StayQuote,
        customer: CustomerFields,
        payment: PaymentFields,
    ) -> Result<Self, BookingError> {
        if quote.nights() != stay.nights() {
            return Err(BookingError::QuoteMismatch {
                stay_nights: stay.nights(),
                quote_nights: quote.nights(),
            });
        }

        let form = FormData {
            customer: &customer,
            payment: &payment,
        };
        if let Some(err) = form.first_issue() {
            debug!(error = %err, "Booking form rejected");
            return Err(err);
        }

        let summary = Self {
            property_name: property_name.into().trim().to_string(),
            stay,
            quote,
            customer: trim_customer(customer),
            payment: trim_payment(payment),
        };

        debug!(
            property = %summary.property_name,
            stay = %summary.stay,
            total = %summary.quote.total(),
            "Booking summary built"
        );

        Ok(summary)
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn stay(&self) -> &StayDates {
        &self.stay
    }

    pub fn quote(&self) -> &StayQuote {
        &self.quote
    }

    pub fn customer(&self) -> &CustomerFields {
        &self.customer
    }

    pub fn payment(&self) -> &PaymentFields {
        &self.payment
    }

    /// "First Last" for the confirmation header
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.customer.first_name, self.customer.last_name)
    }
}

fn trim(value: String) -> String {
    value.trim().to_string()
}

fn trim_customer(customer: CustomerFields) -> CustomerFields {
    CustomerFields {
        first_name: trim(customer.first_name),
        last_name: trim(customer.last_name),
        email: trim(customer.email),
        phone: trim(customer.phone),
        address: AddressFields {
            street: trim(customer.address.street),
            city: trim(customer.address.city),
            state: trim(customer.address.state),
            zip: trim(customer.address.zip),
            country: trim(customer.address.country),
        },
    }
}

fn trim_payment(payment: PaymentFields) -> PaymentFields {
    PaymentFields {
        card_number: trim(payment.card_number),
        expiry: trim(payment.expiry),
        cvv: trim(payment.cvv),
    }
}
