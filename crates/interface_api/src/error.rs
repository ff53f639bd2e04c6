//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_booking::BookingError;
use domain_property::CatalogError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, field) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::InvalidDateRange(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_date_range", msg, None)
            }
            ApiError::Validation { message, field } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                field,
            ),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match &err {
            BookingError::InvalidDateRange(range) => ApiError::InvalidDateRange(range.to_string()),
            BookingError::Validation { field, .. } => ApiError::Validation {
                message: err.to_string(),
                field: Some(field.as_str().to_string()),
            },
            BookingError::QuoteMismatch { .. } => ApiError::Internal(err.to_string()),
            BookingError::NonNegativeConstraintViolation { .. } | BookingError::Money(_) => {
                ApiError::Validation {
                    message: err.to_string(),
                    field: None,
                }
            }
        }
    }
}

/// Bodies that are not JSON are bad requests; JSON of the wrong shape is a
/// validation error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::Validation {
                message: err.body_text(),
                field: None,
            },
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::PropertyNotFound(_) => ApiError::NotFound("Property not found".to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
