//! Order intake service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::geo::GeoPoint;
use crate::domain::pricing::{self, OrderType};
use crate::domain::repositories::{MerchantRepository, OrderRepository};
use crate::error::AppError;

/// Validated order submission, as assembled by the API handler.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub merchant_id: i64,
    pub order_type: OrderType,
    pub customer: Option<GeoPoint>,
    /// Item subtotal in whole Rupiah.
    pub subtotal: i64,
}

/// Service for submitting and reading orders.
///
/// The delivery fee is recomputed here from the stored merchant
/// coordinates at submission time; whatever the checkout UI displayed is
/// advisory only and never trusted.
pub struct OrderService<M: MerchantRepository, O: OrderRepository> {
    merchant_repository: Arc<M>,
    order_repository: Arc<O>,
}

impl<M: MerchantRepository, O: OrderRepository> OrderService<M, O> {
    /// Creates a new order service.
    pub fn new(merchant_repository: Arc<M>, order_repository: Arc<O>) -> Self {
        Self {
            merchant_repository,
            order_repository,
        }
    }

    /// Submits an order, embedding the freshly computed fee snapshot.
    ///
    /// Pickup orders never persist a customer location, even if one was
    /// submitted alongside the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the merchant does not exist,
    /// [`AppError::Validation`] if it is inactive or a delivery order
    /// arrives without a customer location.
    pub async fn place(&self, input: PlaceOrder) -> Result<Order, AppError> {
        let merchant = self
            .merchant_repository
            .find_by_id(input.merchant_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Merchant not found",
                    json!({ "merchant_id": input.merchant_id }),
                )
            })?;

        if !merchant.is_active {
            return Err(AppError::bad_request(
                "Merchant is not accepting orders",
                json!({ "merchant_id": input.merchant_id }),
            ));
        }

        let (quote, customer) = match input.order_type {
            OrderType::Pickup => {
                let quote =
                    pricing::quote(merchant.location(), merchant.location(), OrderType::Pickup);
                (quote, None)
            }
            OrderType::Delivery => {
                let customer = input.customer.ok_or_else(|| {
                    AppError::bad_request(
                        "Delivery orders require a customer location",
                        json!({ "merchant_id": input.merchant_id }),
                    )
                })?;
                let quote = pricing::quote(customer, merchant.location(), OrderType::Delivery);
                (quote, Some(customer))
            }
        };

        let new_order = NewOrder {
            merchant_id: input.merchant_id,
            order_type: input.order_type,
            customer_latitude: customer.map(|c| c.latitude),
            customer_longitude: customer.map(|c| c.longitude),
            subtotal: input.subtotal,
            delivery_fee: quote.fee_amount,
            distance_meters: quote.distance_meters,
            is_free_zone: quote.is_free_zone,
            total: input.subtotal + quote.fee_amount,
        };

        self.order_repository.create(new_order).await
    }

    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn get(&self, id: i64) -> Result<Order, AppError> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))
    }

    /// Lists orders with the total count for pagination.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        merchant_id: Option<i64>,
    ) -> Result<(Vec<Order>, i64), AppError> {
        let orders = self.order_repository.list(offset, limit, merchant_id).await?;
        let total = self.order_repository.count(merchant_id).await?;

        Ok((orders, total))
    }
}
