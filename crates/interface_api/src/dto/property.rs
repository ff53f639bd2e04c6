//! Property DTOs

use domain_property::{Property, Review, ReviewSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListPropertiesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub property: Property,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub total: usize,
    pub average_rating: Option<Decimal>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(reviews: Vec<Review>) -> Self {
        let summary = ReviewSummary::from_reviews(&reviews);
        Self {
            reviews,
            total: summary.total,
            average_rating: summary.average_rating,
        }
    }
}
