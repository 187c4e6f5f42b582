//! Order entity with the delivery fee embedded at submission time.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::geo::GeoPoint;
use crate::domain::pricing::OrderType;

/// A submitted order.
///
/// The fee fields are a snapshot of the pricing calculation at submission
/// time, recomputed server-side from the stored merchant coordinates. They
/// are never updated afterwards, even if the merchant later moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: i64,
    pub merchant_id: i64,
    pub order_type: OrderType,
    pub customer_latitude: Option<f64>,
    pub customer_longitude: Option<f64>,
    /// Item subtotal in whole Rupiah, as submitted by the caller.
    pub subtotal: i64,
    /// Delivery fee in whole Rupiah. Zero for pickup and free-zone orders.
    pub delivery_fee: i64,
    pub distance_meters: f64,
    pub is_free_zone: bool,
    /// `subtotal + delivery_fee`.
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// The customer's delivery location, when one was submitted.
    ///
    /// Pickup orders carry no location.
    pub fn customer_location(&self) -> Option<GeoPoint> {
        match (self.customer_latitude, self.customer_longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

/// Input data for persisting a new order.
///
/// Built by the order service after the fee has been recomputed; handlers
/// never construct this directly from client input.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub merchant_id: i64,
    pub order_type: OrderType,
    pub customer_latitude: Option<f64>,
    pub customer_longitude: Option<f64>,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub distance_meters: f64,
    pub is_free_zone: bool,
    pub total: i64,
}
