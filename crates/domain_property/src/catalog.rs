//! JSON-backed in-memory catalog adapter

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use async_trait::async_trait;
use core_kernel::PropertyId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::ports::PropertyCatalog;
use crate::property::Property;
use crate::review::Review;

/// On-disk shape of a catalog export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Catalog held entirely in memory
///
/// Listings keep the order they had in the document. Reviews are grouped by
/// property and sorted newest first at load time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    properties: Vec<Property>,
    index: HashMap<PropertyId, usize>,
    reviews: BTreeMap<PropertyId, Vec<Review>>,
}

impl InMemoryCatalog {
    /// A catalog with no listings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from a parsed document
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidData` when a listing or review breaks a data
    /// rule, a property id repeats, or a review points at an unknown property.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(document.properties.len());
        for (position, property) in document.properties.iter().enumerate() {
            property.validate()?;
            if index.insert(property.id.clone(), position).is_some() {
                return Err(CatalogError::invalid(format!(
                    "duplicate property id {}",
                    property.id
                )));
            }
        }

        let mut reviews: BTreeMap<PropertyId, Vec<Review>> = BTreeMap::new();
        for review in document.reviews {
            review.validate()?;
            if !index.contains_key(&review.property_id) {
                return Err(CatalogError::invalid(format!(
                    "review {} refers to unknown property {}",
                    review.id, review.property_id
                )));
            }
            reviews.entry(review.property_id.clone()).or_default().push(review);
        }
        for list in reviews.values_mut() {
            list.sort_by(|a, b| b.date.cmp(&a.date));
        }

        Ok(Self {
            properties: document.properties,
            index,
            reviews,
        })
    }

    /// Parses a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Reads a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            properties = catalog.len(),
            "Loaded property catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn find(&self, id: &PropertyId) -> Result<&Property, CatalogError> {
        self.index
            .get(id)
            .map(|&position| &self.properties[position])
            .ok_or_else(|| CatalogError::not_found(id))
    }
}

#[async_trait]
impl PropertyCatalog for InMemoryCatalog {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Property>, CatalogError> {
        let listings: Vec<Property> = match category {
            Some(category) => self
                .properties
                .iter()
                .filter(|p| p.in_category(category))
                .cloned()
                .collect(),
            None => self.properties.clone(),
        };
        debug!(category = ?category, count = listings.len(), "Listed properties");
        Ok(listings)
    }

    async fn get(&self, id: &PropertyId) -> Result<Property, CatalogError> {
        self.find(id).cloned()
    }

    async fn reviews(&self, id: &PropertyId) -> Result<Vec<Review>, CatalogError> {
        self.find(id)?;
        Ok(self.reviews.get(id).cloned().unwrap_or_default())
    }
}
