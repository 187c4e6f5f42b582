//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::pricing::OrderType;
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

const ORDER_COLUMNS: &str = "id, merchant_id, order_type, customer_latitude, customer_longitude, \
                             subtotal, delivery_fee, distance_meters, is_free_zone, total, created_at";

/// Raw database row; `order_type` is stored as lowercase text.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    merchant_id: i64,
    order_type: String,
    customer_latitude: Option<f64>,
    customer_longitude: Option<f64>,
    subtotal: i64,
    delivery_fee: i64,
    distance_meters: f64,
    is_free_zone: bool,
    total: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> Result<Self, AppError> {
        let order_type = row.order_type.parse::<OrderType>().map_err(|e| {
            AppError::internal(
                "Corrupt order row",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Order {
            id: row.id,
            merchant_id: row.merchant_id,
            order_type,
            customer_latitude: row.customer_latitude,
            customer_longitude: row.customer_longitude,
            subtotal: row.subtotal,
            delivery_fee: row.delivery_fee,
            distance_meters: row.distance_meters,
            is_free_zone: row.is_free_zone,
            total: row.total,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL repository for submitted orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO orders (merchant_id, order_type, customer_latitude, customer_longitude,
                                 subtotal, delivery_fee, distance_meters, is_free_zone, total)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(new_order.merchant_id)
        .bind(new_order.order_type.as_str())
        .bind(new_order.customer_latitude)
        .bind(new_order.customer_longitude)
        .bind(new_order.subtotal)
        .bind(new_order.delivery_fee)
        .bind(new_order.distance_meters)
        .bind(new_order.is_free_zone)
        .bind(new_order.total)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        merchant_id: Option<i64>,
    ) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE ($3::bigint IS NULL OR merchant_id = $3)
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .bind(merchant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn count(&self, merchant_id: Option<i64>) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE ($1::bigint IS NULL OR merchant_id = $1)",
        )
        .bind(merchant_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
