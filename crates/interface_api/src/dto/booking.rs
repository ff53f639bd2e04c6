//! Quote and booking DTOs

use chrono::NaiveDate;
use core_kernel::{BookingReference, PropertyId};
use domain_booking::{BookingSummary, CustomerFields, PaymentFields, StayQuote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date selection as the form sends it; either side may still be empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub customer: CustomerFields,
    pub payment: PaymentFields,
}

#[derive(Debug, Serialize)]
pub struct FeeLine {
    pub label: String,
    pub amount: Decimal,
}

/// Itemized price lines
#[derive(Debug, Serialize)]
pub struct QuoteLines {
    pub currency: String,
    pub nights: u32,
    pub nightly_rate: Decimal,
    pub subtotal: Decimal,
    pub fees: Vec<FeeLine>,
    pub total: Decimal,
}

impl From<&StayQuote> for QuoteLines {
    fn from(quote: &StayQuote) -> Self {
        Self {
            currency: quote.currency().code().to_string(),
            nights: quote.nights(),
            nightly_rate: quote.nightly_rate().amount(),
            subtotal: quote.subtotal().amount(),
            fees: quote
                .fees()
                .iter()
                .map(|fee| FeeLine {
                    label: fee.label.clone(),
                    amount: fee.amount.amount(),
                })
                .collect(),
            total: quote.total().amount(),
        }
    }
}

/// Live quote for the current selection
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub property_id: PropertyId,
    pub range_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_error: Option<String>,
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    #[serde(flatten)]
    pub quote: QuoteLines,
}

#[derive(Debug, Serialize)]
pub struct GuestResponse {
    pub name: String,
    #[serde(flatten)]
    pub details: CustomerFields,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub card_number: String,
    pub expiry: String,
}

impl From<&PaymentFields> for PaymentResponse {
    fn from(payment: &PaymentFields) -> Self {
        Self {
            card_number: payment.masked_card_number(),
            expiry: payment.expiry.clone(),
        }
    }
}

/// Booking confirmation
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub reference: String,
    pub property_id: PropertyId,
    pub property_name: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub quote: QuoteLines,
    pub guest: GuestResponse,
    pub payment: PaymentResponse,
}

impl BookingResponse {
    pub fn new(reference: BookingReference, property_id: PropertyId, summary: &BookingSummary) -> Self {
        Self {
            reference: reference.to_string(),
            property_id,
            property_name: summary.property_name().to_string(),
            checkin: summary.stay().checkin(),
            checkout: summary.stay().checkout(),
            quote: QuoteLines::from(summary.quote()),
            guest: GuestResponse {
                name: summary.guest_name(),
                details: summary.customer().clone(),
            },
            payment: PaymentResponse::from(summary.payment()),
        }
    }
}
