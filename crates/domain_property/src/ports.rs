//! Property catalog port
//!
//! The API depends on this trait only. Adapters decide where listings come
//! from: a JSON export ([`InMemoryCatalog`](crate::InMemoryCatalog)) or a
//! property data provider's own service.

use async_trait::async_trait;
use core_kernel::PropertyId;

use crate::error::CatalogError;
use crate::property::Property;
use crate::review::Review;

/// Read access to property listings and their reviews
#[async_trait]
pub trait PropertyCatalog: Send + Sync {
    /// Lists properties, optionally limited to one category
    async fn list(&self, category: Option<&str>) -> Result<Vec<Property>, CatalogError>;

    /// Gets one property
    ///
    /// # Errors
    ///
    /// `CatalogError::PropertyNotFound` when the id is unknown.
    async fn get(&self, id: &PropertyId) -> Result<Property, CatalogError>;

    /// Gets a property's reviews, newest first
    ///
    /// # Errors
    ///
    /// `CatalogError::PropertyNotFound` when the id is unknown.
    async fn reviews(&self, id: &PropertyId) -> Result<Vec<Review>, CatalogError>;
}
