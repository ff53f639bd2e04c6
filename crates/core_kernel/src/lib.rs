//! Core Kernel - Foundational types for the stay booking system
//!
//! This crate provides the building blocks shared by the booking, property
//! and API crates:
//! - Money types with precise decimal arithmetic
//! - A reference timezone that turns raw date input into calendar dates
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{Timezone, TemporalError};
pub use identifiers::{PropertyId, ReviewId, BookingReference};
pub use error::CoreError;
