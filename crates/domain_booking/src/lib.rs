//! Booking Domain
//!
//! This crate holds the business logic behind the booking form: turning the
//! guest's date selection into a number of nights, pricing the stay, and
//! assembling the confirmed booking. Everything here is a pure function over
//! in-memory values, with no I/O and no shared state.
//!
//! # Flow
//!
//! ```text
//! (checkin, checkout) --validate--> StayDates --nights--> u32
//!                                                          |
//!               nightly rate + FeeSchedule --compose--> StayQuote
//!                                                          |
//!     customer + payment fields --build--> BookingSummary <-+
//! ```
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money, Timezone};
//! use domain_booking::{FeeSchedule, PriceComposer, StayDates};
//! use rust_decimal_macros::dec;
//!
//! let tz = Timezone::default();
//! let stay = StayDates::validate(Some("2024-08-24"), Some("2024-08-27"), &tz).unwrap();
//!
//! let fees = FeeSchedule::new()
//!     .with_fee("Cleaning fee", Money::new(dec!(50), Currency::USD))
//!     .with_fee("Service fee", Money::new(dec!(30), Currency::USD));
//!
//! let quote = PriceComposer::compose(
//!     Money::new(dec!(2500), Currency::USD),
//!     stay.nights(),
//!     &fees,
//! ).unwrap();
//!
//! assert_eq!(quote.nights(), 3);
//! assert_eq!(quote.total().amount(), dec!(7580));
//! ```

pub mod stay;
pub mod quote;
pub mod form;
pub mod summary;
pub mod error;

pub use stay::{nights, InvalidDateRange, StayBoundary, StayDates};
pub use quote::{Fee, FeeSchedule, PriceComposer, StayQuote};
pub use form::{AddressFields, CustomerFields, FieldIssue, FormField, PaymentFields};
pub use summary::BookingSummary;
pub use error::BookingError;
