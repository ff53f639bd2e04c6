//! Calendar date handling
//!
//! Guests pick stay dates as strings. Those strings may be plain dates or
//! full timestamps carrying an offset, so every value is converted into one
//! reference timezone before its calendar date is taken. Two timestamps on
//! the same day compare equal no matter their time of day or the caller's
//! local clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-less wall-clock layouts, read as local time in the reference zone
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Errors related to temporal operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date value is empty")]
    Empty,

    #[error("Unparsable date: {0}")]
    Unparsable(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Reference timezone used to normalize stay dates
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses raw date input into a calendar date in this timezone
    ///
    /// Accepted inputs:
    /// - `2024-08-24`, taken as-is
    /// - RFC 3339 timestamps such as `2024-08-24T23:30:00-04:00`, converted
    ///   into this timezone before the date is read
    /// - offset-less timestamps such as `2024-08-24T15:00`, read as wall-clock
    ///   time already in this timezone
    ///
    /// # Errors
    ///
    /// `TemporalError::Empty` for blank input, `TemporalError::Unparsable`
    /// for anything else that is not one of the layouts above.
    pub fn calendar_date(&self, raw: &str) -> Result<NaiveDate, TemporalError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TemporalError::Empty);
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Ok(date);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Ok(instant.with_timezone(&self.0).date_naive());
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|local| local.date())
            .ok_or_else(|| TemporalError::Unparsable(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        let tz = Timezone::default();
        assert_eq!(tz.calendar_date("2024-08-24").unwrap(), date(2024, 8, 24));
    }

    #[test]
    fn test_offset_timestamp_is_converted_to_reference_zone() {
        let tz = Timezone::default();
        // 23:30 in New York is already the next day in UTC
        assert_eq!(
            tz.calendar_date("2024-08-24T23:30:00-04:00").unwrap(),
            date(2024, 8, 25)
        );
    }

    #[test]
    fn test_naive_timestamp_keeps_its_wall_clock_date() {
        let tz: Timezone = "Africa/Nairobi".parse().unwrap();
        assert_eq!(tz.calendar_date("2024-08-24T15:00").unwrap(), date(2024, 8, 24));
        assert_eq!(
            tz.calendar_date("2024-08-24 23:59:59").unwrap(),
            date(2024, 8, 24)
        );
    }

    #[test]
    fn test_blank_and_garbage_input() {
        let tz = Timezone::default();
        assert_eq!(tz.calendar_date("   "), Err(TemporalError::Empty));
        assert!(matches!(
            tz.calendar_date("24/08/2024"),
            Err(TemporalError::Unparsable(_))
        ));
        assert!(matches!(
            tz.calendar_date("2024-02-30"),
            Err(TemporalError::Unparsable(_))
        ));
    }

    #[test]
    fn test_timezone_serde_uses_iana_name() {
        let tz: Timezone = "Europe/Madrid".parse().unwrap();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Europe/Madrid\"");
        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_unknown_timezone() {
        assert!(matches!(
            "Mars/Olympus".parse::<Timezone>(),
            Err(TemporalError::UnknownTimezone(_))
        ));
    }
}
