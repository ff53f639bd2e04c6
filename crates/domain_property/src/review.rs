//! Guest reviews

use chrono::NaiveDate;
use core_kernel::{PropertyId, ReviewId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A guest's review of a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub property_id: PropertyId,
    pub reviewer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// Checks the rating is a whole number of stars in range
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::invalid(format!(
                "review {} has rating {} outside {}..={}",
                self.id,
                self.rating,
                Self::MIN_RATING,
                Self::MAX_RATING
            )));
        }
        Ok(())
    }
}

/// Count and average of a property's reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub total: usize,
    /// Mean rating rounded to 2 places; `None` when there are no reviews
    pub average_rating: Option<Decimal>,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total = reviews.len();
        let average_rating = if total == 0 {
            None
        } else {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            Some((Decimal::from(sum) / Decimal::from(total as u64)).round_dp(2))
        };
        Self {
            total,
            average_rating,
        }
    }
}
