//! DTOs for order intake and listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PaginationMeta;
use super::quote::LocationDto;
use crate::domain::entities::Order;
use crate::domain::pricing::OrderType;

/// Request to submit an order.
///
/// Carries no fee fields: the fee is recomputed server-side from the
/// stored merchant coordinates, never trusted from the client.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub merchant_id: i64,

    pub order_type: OrderType,

    /// Required for delivery orders; dropped for pickup.
    #[validate(nested)]
    pub location: Option<LocationDto>,

    /// Item subtotal in whole Rupiah.
    #[validate(range(min = 0))]
    pub subtotal: i64,
}

/// Order representation returned by the API.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub merchant_id: i64,
    pub order_type: OrderType,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub distance_meters: f64,
    pub is_free_zone: bool,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            merchant_id: order.merchant_id,
            order_type: order.order_type,
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            distance_meters: order.distance_meters,
            is_free_zone: order.is_free_zone,
            total: order.total,
            created_at: order.created_at,
        }
    }
}

/// Paginated order listing.
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub items: Vec<OrderResponse>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_subtotal_is_rejected() {
        let request: CreateOrderRequest = serde_json::from_str(
            r#"{ "merchant_id": 1, "order_type": "pickup", "subtotal": -100 }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_delivery_request_with_location() {
        let request: CreateOrderRequest = serde_json::from_str(
            r#"{
                "merchant_id": 1,
                "order_type": "delivery",
                "location": { "latitude": -7.96, "longitude": 112.63 },
                "subtotal": 45000
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }
}
