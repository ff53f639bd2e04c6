//! Stay dates and night counting
//!
//! A stay is valid only when both dates parse and checkout falls on a later
//! calendar day than checkin. Dates are normalized through the reference
//! [`Timezone`] first, so the night count depends on calendar days alone.
//! Times of day, daylight-saving shifts and the caller's local clock have
//! no effect.

use chrono::NaiveDate;
use core_kernel::{TemporalError, Timezone};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which side of the date range a problem refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StayBoundary {
    Checkin,
    Checkout,
}

impl fmt::Display for StayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StayBoundary::Checkin => f.write_str("checkin"),
            StayBoundary::Checkout => f.write_str("checkout"),
        }
    }
}

/// Reasons a checkin/checkout pair does not form a stay
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidDateRange {
    #[error("{0} date has not been chosen")]
    Missing(StayBoundary),

    #[error("{boundary} date '{value}' could not be parsed")]
    Unparsable {
        boundary: StayBoundary,
        value: String,
    },

    #[error("checkout {checkout} must be after checkin {checkin}")]
    CheckoutNotAfterCheckin {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },
}

/// A validated checkin/checkout pair
///
/// Invariant: `checkout > checkin` by calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayDates {
    /// Builds a stay from two calendar dates
    ///
    /// # Errors
    ///
    /// `InvalidDateRange::CheckoutNotAfterCheckin` when the dates are equal
    /// or reversed.
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, InvalidDateRange> {
        if checkout <= checkin {
            return Err(InvalidDateRange::CheckoutNotAfterCheckin { checkin, checkout });
        }
        Ok(Self { checkin, checkout })
    }

    /// Validates raw date input from the booking form
    ///
    /// Either value may be absent (not chosen yet). Checkin is examined
    /// before checkout, so a form with both dates missing reports checkin.
    ///
    /// # Arguments
    ///
    /// * `checkin` - Raw checkin value, if any
    /// * `checkout` - Raw checkout value, if any
    /// * `tz` - Reference timezone both values are normalized into
    pub fn validate(
        checkin: Option<&str>,
        checkout: Option<&str>,
        tz: &Timezone,
    ) -> Result<Self, InvalidDateRange> {
        let checkin = parse_boundary(checkin, StayBoundary::Checkin, tz)?;
        let checkout = parse_boundary(checkout, StayBoundary::Checkout, tz)?;
        Self::new(checkin, checkout)
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Number of nights in the stay, always at least 1
    ///
    /// Both ends are calendar dates, so the difference is a whole number of
    /// days and rounding up any partial day is already accounted for.
    pub fn nights(&self) -> u32 {
        let days = (self.checkout - self.checkin).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.checkin, self.checkout)
    }
}

/// Nights for a validation outcome: 0 for an invalid range
pub fn nights(selection: &Result<StayDates, InvalidDateRange>) -> u32 {
    match selection {
        Ok(stay) => stay.nights(),
        Err(_) => 0,
    }
}

fn parse_boundary(
    raw: Option<&str>,
    boundary: StayBoundary,
    tz: &Timezone,
) -> Result<NaiveDate, InvalidDateRange> {
    let raw = raw.ok_or(InvalidDateRange::Missing(boundary))?;
    tz.calendar_date(raw).map_err(|err| match err {
        TemporalError::Empty => InvalidDateRange::Missing(boundary),
        _ => InvalidDateRange::Unparsable {
            boundary,
            value: raw.trim().to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> Timezone {
        Timezone::default()
    }

    #[test]
    fn test_three_night_stay() {
        let stay = StayDates::validate(Some("2024-08-24"), Some("2024-08-27"), &utc()).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_same_day_is_invalid() {
        let result = StayDates::validate(Some("2024-08-24"), Some("2024-08-24"), &utc());
        assert!(matches!(
            result,
            Err(InvalidDateRange::CheckoutNotAfterCheckin { .. })
        ));
        assert_eq!(nights(&result), 0);
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(
            StayDates::validate(None, Some("2024-08-24"), &utc()),
            Err(InvalidDateRange::Missing(StayBoundary::Checkin))
        );
        assert_eq!(
            StayDates::validate(Some("2024-08-24"), Some(""), &utc()),
            Err(InvalidDateRange::Missing(StayBoundary::Checkout))
        );
    }

    #[test]
    fn test_times_of_day_do_not_change_the_count() {
        let stay = StayDates::validate(
            Some("2024-08-24T22:00:00Z"),
            Some("2024-08-27T06:00:00Z"),
            &utc(),
        )
        .unwrap();
        assert_eq!(stay.nights(), 3);
    }
}
