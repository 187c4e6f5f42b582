//! DTOs for the fee quote endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::geo::GeoPoint;
use crate::domain::pricing::{FeeQuote, OrderType};

/// A customer location as submitted by the checkout UI.
///
/// This is where the coordinate-range precondition is enforced; the
/// pricing core itself accepts any finite values.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

impl From<LocationDto> for GeoPoint {
    fn from(location: LocationDto) -> Self {
        GeoPoint::new(location.latitude, location.longitude)
    }
}

/// Request for a delivery fee quote.
///
/// The checkout UI sends one of these whenever the customer's selected
/// location, the merchant, or the delivery/pickup toggle changes.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i64,

    pub order_type: OrderType,

    /// Required for delivery quotes; ignored for pickup.
    #[validate(nested)]
    pub location: Option<LocationDto>,
}

/// A served fee quote.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub merchant_id: i64,
    pub order_type: OrderType,
    /// Delivery fee in whole Rupiah.
    pub fee_amount: i64,
    pub distance_meters: f64,
    pub is_free_zone: bool,
}

impl QuoteResponse {
    /// Builds the response for a served quote.
    pub fn from_quote(merchant_id: i64, order_type: OrderType, quote: FeeQuote) -> Self {
        Self {
            merchant_id,
            order_type,
            fee_amount: quote.fee_amount,
            distance_meters: quote.distance_meters,
            is_free_zone: quote.is_free_zone,
        }
    }
}
