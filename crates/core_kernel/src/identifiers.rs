//! Strongly-typed identifiers for domain entities
//!
//! Catalog entries are keyed by the short string ids the property data
//! provider assigns (`"1"`, `"villa-arrecife"`), while booking confirmations
//! get a time-ordered UUID. Newtype wrappers keep the two from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_key {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a key from the provider's identifier
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the key as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }
    };
}

define_key!(PropertyId);
define_key!(ReviewId);

/// Reference handed to the guest once a booking is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(Uuid);

impl BookingReference {
    const PREFIX: &'static str = "BKG";

    /// Creates a new time-ordered reference (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookingReference {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::PREFIX, self.0)
    }
}

impl FromStr for BookingReference {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_reference_display() {
        let reference = BookingReference::new();
        assert!(reference.to_string().starts_with("BKG-"));
    }

    #[test]
    fn test_booking_reference_parsing() {
        let original = BookingReference::new();
        let parsed: BookingReference = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_property_key_is_transparent_in_json() {
        let id = PropertyId::from("villa-arrecife");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"villa-arrecife\"");
        assert_eq!(id.as_str(), "villa-arrecife");
    }
}
