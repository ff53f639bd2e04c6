//! Rental property listing

use core_kernel::PropertyId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Where a property is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub state: String,
    pub city: String,
    pub country: String,
}

/// What a property sleeps and provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offers {
    pub bed: String,
    pub shower: String,
    pub occupants: String,
}

/// A fixed per-booking charge, in the catalog currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFee {
    pub label: String,
    pub amount: Decimal,
}

/// A bookable rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: PropertyAddress,
    /// Average guest rating, 0 to 5
    pub rating: Decimal,
    #[serde(default)]
    pub category: Vec<String>,
    /// Nightly rate, in the catalog currency
    pub price: Decimal,
    pub offers: Offers,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cleaning, service and similar fees charged once per booking
    #[serde(default)]
    pub fees: Vec<PropertyFee>,
}

impl Property {
    /// "City, State, Country"
    pub fn location(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.city, self.address.state, self.address.country
        )
    }

    /// Case-insensitive category match
    pub fn in_category(&self, category: &str) -> bool {
        let wanted = category.trim();
        self.category.iter().any(|c| c.eq_ignore_ascii_case(wanted))
    }

    /// Checks the listing's data rules
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidData` for an empty id or name, a negative price
    /// or fee, or a rating outside 0..=5.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CatalogError::invalid("property id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(format!("property {} has no name", self.id)));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(CatalogError::invalid(format!(
                "property {} has negative price {}",
                self.id, self.price
            )));
        }
        if self.rating < dec!(0) || self.rating > dec!(5) {
            return Err(CatalogError::invalid(format!(
                "property {} has rating {} outside 0..=5",
                self.id, self.rating
            )));
        }
        if let Some(fee) = self
            .fees
            .iter()
            .find(|fee| fee.amount.is_sign_negative() && !fee.amount.is_zero())
        {
            return Err(CatalogError::invalid(format!(
                "property {} has negative fee '{}'",
                self.id, fee.label
            )));
        }
        Ok(())
    }
}
