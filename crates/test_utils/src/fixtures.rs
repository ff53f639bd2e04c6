//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the booking and property domains.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, Timezone};
use domain_booking::{AddressFields, CustomerFields, FeeSchedule, PaymentFields, StayDates};
use domain_property::InMemoryCatalog;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Nightly rate of the beach house listing
    pub fn usd_nightly_rate() -> Money {
        Money::new(dec!(2500), Currency::USD)
    }

    pub fn usd_cleaning_fee() -> Money {
        Money::new(dec!(50), Currency::USD)
    }

    pub fn usd_service_fee() -> Money {
        Money::new(dec!(30), Currency::USD)
    }

    /// Cleaning fee followed by service fee
    pub fn standard_fee_schedule() -> FeeSchedule {
        FeeSchedule::new()
            .with_fee("Cleaning fee", Self::usd_cleaning_fee())
            .with_fee("Service fee", Self::usd_service_fee())
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_cleaning_fee() -> Money {
        Money::new(dec!(45), Currency::EUR)
    }
}

/// Fixture for stay dates
pub struct StayFixtures;

impl StayFixtures {
    pub fn checkin() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 24).unwrap()
    }

    pub fn checkout() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 27).unwrap()
    }

    /// Three nights, 24 to 27 August 2024
    pub fn august_stay() -> StayDates {
        StayDates::new(Self::checkin(), Self::checkout()).unwrap()
    }

    pub fn utc() -> Timezone {
        Timezone::default()
    }
}

/// Fixture for booking form input
pub struct FormFixtures;

impl FormFixtures {
    pub fn customer() -> CustomerFields {
        CustomerFields {
            first_name: "Amara".to_string(),
            last_name: "Okafor".to_string(),
            email: "amara.okafor@example.com".to_string(),
            phone: "+254 700 000 123".to_string(),
            address: AddressFields {
                street: "14 Ngong Road".to_string(),
                city: "Nairobi".to_string(),
                state: "Nairobi County".to_string(),
                zip: "00100".to_string(),
                country: "Kenya".to_string(),
            },
        }
    }

    pub fn payment() -> PaymentFields {
        PaymentFields {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry: "12/28".to_string(),
            cvv: "123".to_string(),
        }
    }
}

/// Fixture for the property catalog
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Id of the listing with a fee schedule and reviews
    pub const VILLA_ID: &'static str = "1";

    /// Id of the listing with no fees and no reviews
    pub const LOFT_ID: &'static str = "2";

    /// Two listings and three reviews
    pub fn catalog_json() -> &'static str {
        r#"{
          "properties": [
            {
              "id": "1",
              "name": "Villa Arrecife Beach House",
              "address": { "state": "Alicante", "city": "Alicante", "country": "Spain" },
              "rating": 4.76,
              "category": ["Luxury Villa", "Pool", "Free Parking"],
              "price": 2500,
              "offers": { "bed": "3", "shower": "3", "occupants": "4-6" },
              "image": "https://example.com/villa.jpg",
              "discount": "30",
              "description": "Beachfront villa with a private pool.",
              "fees": [
                { "label": "Cleaning fee", "amount": 50 },
                { "label": "Service fee", "amount": 30 }
              ]
            },
            {
              "id": "2",
              "name": "Downtown Loft",
              "address": { "state": "Lagos", "city": "Ikoyi", "country": "Nigeria" },
              "rating": "4.2",
              "category": ["City", "Free WiFi"],
              "price": "120.50",
              "offers": { "bed": "1", "shower": "1", "occupants": "2" },
              "image": "https://example.com/loft.jpg"
            }
          ],
          "reviews": [
            {
              "id": "r1", "property_id": "1", "reviewer": "Johanna", "rating": 5,
              "comment": "Perfect beach week.", "date": "2024-07-02"
            },
            {
              "id": "r2", "property_id": "1", "reviewer": "Tomas", "rating": 4,
              "comment": "Great pool, noisy road.", "date": "2024-08-15"
            },
            {
              "id": "r3", "property_id": "1", "reviewer": "Priya", "rating": 4,
              "comment": "Would come back.", "date": "2024-06-11"
            }
          ]
        }"#
    }

    pub fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_json_str(Self::catalog_json()).unwrap()
    }
}
