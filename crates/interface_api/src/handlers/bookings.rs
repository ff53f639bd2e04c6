//! Quote and booking handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::{BookingReference, Currency, Money, PropertyId};
use domain_booking::{nights, BookingError, BookingSummary, FeeSchedule, PriceComposer, StayDates};
use domain_property::Property;
use tracing::info;

use crate::dto::booking::{BookingRequest, BookingResponse, QuoteLines, QuoteRequest, QuoteResponse};
use crate::error::ApiError;
use crate::AppState;

/// Nightly rate and fee schedule of a listing in the catalog currency
fn pricing(property: &Property, currency: Currency) -> (Money, FeeSchedule) {
    let rate = Money::new(property.price, currency);
    let fees = property
        .fees
        .iter()
        .fold(FeeSchedule::new(), |schedule, fee| {
            schedule.with_fee(fee.label.clone(), Money::new(fee.amount, currency))
        });
    (rate, fees)
}

/// Live quote for a date selection
///
/// An incomplete or inverted selection still prices: it counts zero nights,
/// so the total is the fees alone, and `range_valid` is false.
pub async fn quote_stay(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(req) = payload?;
    let property = state.catalog.get(&PropertyId::from(id)).await?;
    let (rate, fees) = pricing(&property, state.currency);

    let selection = StayDates::validate(req.checkin.as_deref(), req.checkout.as_deref(), &state.timezone);
    let quote = PriceComposer::compose(rate, nights(&selection), &fees)?;

    let (checkin, checkout) = match &selection {
        Ok(stay) => (Some(stay.checkin()), Some(stay.checkout())),
        Err(_) => (None, None),
    };

    Ok(Json(QuoteResponse {
        property_id: property.id,
        range_valid: selection.is_ok(),
        range_error: selection.as_ref().err().map(ToString::to_string),
        checkin,
        checkout,
        quote: QuoteLines::from(&quote),
    }))
}

/// Confirms a booking
pub async fn create_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let Json(req) = payload?;
    let property = state.catalog.get(&PropertyId::from(id)).await?;
    let (rate, fees) = pricing(&property, state.currency);

    let stay = StayDates::validate(req.checkin.as_deref(), req.checkout.as_deref(), &state.timezone)
        .map_err(BookingError::from)?;
    let quote = PriceComposer::compose(rate, stay.nights(), &fees)?;
    let summary = BookingSummary::build(property.name.clone(), stay, quote, req.customer, req.payment)?;

    let reference = BookingReference::new();
    info!(
        reference = %reference,
        property = %property.id,
        stay = %summary.stay(),
        total = %summary.quote().total(),
        "Booking confirmed"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse::new(reference, property.id, &summary)),
    ))
}
