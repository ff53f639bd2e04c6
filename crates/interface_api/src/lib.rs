//! HTTP API Layer
//!
//! This crate serves the rental catalog and the booking flow over JSON using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: listings, reviews, live quotes and booking confirmation
//! - **Middleware**: request logging, tracing, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(catalog), &config)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use core_kernel::{CoreError, Currency, Timezone};
use domain_property::PropertyCatalog;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::request_logging;
use crate::handlers::{bookings, health, properties};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn PropertyCatalog>,
    pub currency: Currency,
    pub timezone: Timezone,
}

impl AppState {
    /// Builds the state, resolving the configured currency and timezone
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` for an unknown currency code or timezone name.
    pub fn new(catalog: Arc<dyn PropertyCatalog>, config: &ApiConfig) -> Result<Self, CoreError> {
        Ok(Self {
            catalog,
            currency: config.currency()?,
            timezone: config.timezone()?,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Catalog and pricing settings shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let property_routes = Router::new()
        .route("/", get(properties::list_properties))
        .route("/:id", get(properties::get_property))
        .route("/:id/reviews", get(properties::list_reviews))
        .route("/:id/quote", post(bookings::quote_stay))
        .route("/:id/bookings", post(bookings::create_booking));

    let api_routes = Router::new()
        .nest("/properties", property_routes)
        .layer(axum_middleware::from_fn(request_logging));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
