//! Test Data Builders
//!
//! Provides a builder for booking form input with sensible defaults. Tests
//! blank or override only the fields they care about.

use domain_booking::{CustomerFields, FormField, PaymentFields};

use crate::fixtures::FormFixtures;

/// Builder for the customer and payment halves of the booking form
#[derive(Debug, Clone)]
pub struct BookingFormBuilder {
    customer: CustomerFields,
    payment: PaymentFields,
}

impl Default for BookingFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormBuilder {
    /// Creates a builder with every field filled in
    pub fn new() -> Self {
        Self {
            customer: FormFixtures::customer(),
            payment: FormFixtures::payment(),
        }
    }

    /// Sets one field to the given value
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        *self.slot(field) = value.into();
        self
    }

    /// Clears one field
    pub fn without(self, field: FormField) -> Self {
        self.with(field, "")
    }

    /// Sets every field to an empty string
    pub fn blank() -> Self {
        FormField::ORDER
            .iter()
            .fold(Self::new(), |builder, &field| builder.without(field))
    }

    /// Returns the customer and payment fields
    pub fn build(self) -> (CustomerFields, PaymentFields) {
        (self.customer, self.payment)
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.customer.first_name,
            FormField::LastName => &mut self.customer.last_name,
            FormField::Email => &mut self.customer.email,
            FormField::Phone => &mut self.customer.phone,
            FormField::Street => &mut self.customer.address.street,
            FormField::City => &mut self.customer.address.city,
            FormField::State => &mut self.customer.address.state,
            FormField::Zip => &mut self.customer.address.zip,
            FormField::Country => &mut self.customer.address.country,
            FormField::CardNumber => &mut self.payment.card_number,
            FormField::Expiry => &mut self.payment.expiry,
            FormField::Cvv => &mut self.payment.cvv,
        }
    }
}
