//! Property catalog errors

use thiserror::Error;

/// Errors that can occur reading the property catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No property with the given ID
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// The catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid JSON for the expected shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but breaks a data rule
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

impl CatalogError {
    /// Creates a PropertyNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        CatalogError::PropertyNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidData(message.into())
    }
}
