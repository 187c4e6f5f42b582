//! PostgreSQL implementation of the merchant repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Merchant, MerchantPatch, NewMerchant};
use crate::domain::repositories::MerchantRepository;
use crate::error::AppError;

const MERCHANT_COLUMNS: &str =
    "id, name, address, latitude, longitude, is_active, created_at, updated_at";

/// PostgreSQL repository for the merchant registry.
pub struct PgMerchantRepository {
    pool: Arc<PgPool>,
}

impl PgMerchantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MerchantRepository for PgMerchantRepository {
    async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, AppError> {
        let merchant = sqlx::query_as::<_, Merchant>(&format!(
            "INSERT INTO merchants (name, address, latitude, longitude)
             VALUES ($1, $2, $3, $4)
             RETURNING {MERCHANT_COLUMNS}"
        ))
        .bind(&new_merchant.name)
        .bind(&new_merchant.address)
        .bind(new_merchant.latitude)
        .bind(new_merchant.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(merchant)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Merchant>, AppError> {
        let merchant = sqlx::query_as::<_, Merchant>(&format!(
            "SELECT {MERCHANT_COLUMNS} FROM merchants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(merchant)
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        include_inactive: bool,
    ) -> Result<Vec<Merchant>, AppError> {
        let merchants = sqlx::query_as::<_, Merchant>(&format!(
            "SELECT {MERCHANT_COLUMNS} FROM merchants
             WHERE is_active OR $3
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .bind(include_inactive)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(merchants)
    }

    async fn count(&self, include_inactive: bool) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM merchants WHERE is_active OR $1",
        )
        .bind(include_inactive)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: MerchantPatch) -> Result<Merchant, AppError> {
        let merchant = sqlx::query_as::<_, Merchant>(&format!(
            "UPDATE merchants
             SET name = COALESCE($2, name),
                 address = COALESCE($3, address),
                 latitude = COALESCE($4, latitude),
                 longitude = COALESCE($5, longitude),
                 is_active = COALESCE($6, is_active),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {MERCHANT_COLUMNS}"
        ))
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.address)
        .bind(patch.latitude)
        .bind(patch.longitude)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        merchant.ok_or_else(|| AppError::not_found("Merchant not found", json!({ "id": id })))
    }

    async fn deactivate(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE merchants SET is_active = FALSE, updated_at = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
