//! Property Domain
//!
//! Rental listings and guest reviews, plus the [`PropertyCatalog`] port the
//! API reads them through.
//!
//! The catalog is a read-only source owned by an external property data
//! provider. [`InMemoryCatalog`] adapts a JSON export of that data:
//!
//! ```json
//! {
//!   "properties": [{ "id": "1", "name": "Villa Arrecife Beach House", "price": 2500, ... }],
//!   "reviews": [{ "id": "r1", "property_id": "1", "rating": 5, ... }]
//! }
//! ```

pub mod property;
pub mod review;
pub mod ports;
pub mod catalog;
pub mod error;

pub use property::{Offers, Property, PropertyAddress, PropertyFee};
pub use review::{Review, ReviewSummary};
pub use ports::PropertyCatalog;
pub use catalog::{CatalogDocument, InMemoryCatalog};
pub use error::CatalogError;
