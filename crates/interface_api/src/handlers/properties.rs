//! Property listing handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use core_kernel::PropertyId;
use tracing::debug;

use crate::dto::property::{ListPropertiesQuery, PropertyListResponse, PropertyResponse, ReviewsResponse};
use crate::error::ApiError;
use crate::AppState;

/// Lists properties, optionally narrowed to one category
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<ListPropertiesQuery>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    let category = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let properties = state.catalog.list(category).await?;

    debug!(category = ?category, count = properties.len(), "Listed properties");

    Ok(Json(PropertyListResponse { properties }))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyResponse>, ApiError> {
    let property = state.catalog.get(&PropertyId::from(id)).await?;
    Ok(Json(PropertyResponse { property }))
}

/// Reviews for a property, newest first
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let reviews = state.catalog.reviews(&PropertyId::from(id)).await?;
    Ok(Json(ReviewsResponse::from(reviews)))
}
