//! Handler for the fee quote endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::quote::{QuoteRequest, QuoteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Quotes the delivery fee for a checkout session.
///
/// # Endpoint
///
/// `POST /api/quote`
///
/// # Request Body
///
/// ```json
/// {
///   "merchant_id": 7,
///   "order_type": "delivery",
///   "location": { "latitude": -7.9621, "longitude": 112.6326 }
/// }
/// ```
///
/// For `"order_type": "pickup"` the location may be omitted.
///
/// # Response
///
/// ```json
/// {
///   "merchant_id": 7,
///   "order_type": "delivery",
///   "fee_amount": 0,
///   "distance_meters": 500.2,
///   "is_free_zone": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for out-of-range coordinates, a delivery quote
/// without a location, or an inactive merchant; 404 Not Found for an
/// unknown merchant.
pub async fn quote_handler(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    payload.validate()?;

    let quote = state
        .quote_service
        .quote(
            payload.merchant_id,
            payload.location.map(Into::into),
            payload.order_type,
        )
        .await?;

    Ok(Json(QuoteResponse::from_quote(
        payload.merchant_id,
        payload.order_type,
        quote,
    )))
}
