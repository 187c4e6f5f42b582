//! PostgreSQL implementation of the quote log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::quote_event::QuoteEvent;
use crate::domain::repositories::QuoteLogRepository;
use crate::error::AppError;

/// Append-only PostgreSQL quote log.
///
/// One insert per served quote; rows are aggregated offline for merchant
/// analytics and are never read by the service itself.
pub struct PgQuoteLogRepository {
    pool: Arc<PgPool>,
}

impl PgQuoteLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteLogRepository for PgQuoteLogRepository {
    async fn record(&self, event: QuoteEvent) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO quote_log (merchant_id, order_type, fee_amount, distance_meters, is_free_zone)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(event.merchant_id)
        .bind(event.order_type.as_str())
        .bind(event.fee_amount)
        .bind(event.distance_meters)
        .bind(event.is_free_zone)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
