//! Merchant registry service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Merchant, MerchantPatch, NewMerchant};
use crate::domain::repositories::MerchantRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service for managing the merchant registry.
///
/// Mutations invalidate the merchant's cache entry so the quote path never
/// measures against stale coordinates.
pub struct MerchantService<M: MerchantRepository> {
    merchant_repository: Arc<M>,
    cache: Arc<dyn CacheService>,
}

impl<M: MerchantRepository> MerchantService<M> {
    /// Creates a new merchant service.
    pub fn new(merchant_repository: Arc<M>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            merchant_repository,
            cache,
        }
    }

    /// Registers a new merchant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already registered.
    pub async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, AppError> {
        self.merchant_repository.create(new_merchant).await
    }

    /// Fetches a merchant by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the merchant does not exist.
    pub async fn get(&self, id: i64) -> Result<Merchant, AppError> {
        self.merchant_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Merchant not found", json!({ "id": id })))
    }

    /// Lists merchants with the total count for pagination.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        include_inactive: bool,
    ) -> Result<(Vec<Merchant>, i64), AppError> {
        let merchants = self
            .merchant_repository
            .list(offset, limit, include_inactive)
            .await?;
        let total = self.merchant_repository.count(include_inactive).await?;

        Ok((merchants, total))
    }

    /// Partially updates a merchant and drops its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the merchant does not exist.
    pub async fn update(&self, id: i64, patch: MerchantPatch) -> Result<Merchant, AppError> {
        let merchant = self.merchant_repository.update(id, patch).await?;
        let _ = self.cache.invalidate(id).await;

        Ok(merchant)
    }

    /// Deactivates a merchant and drops its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active merchant matches `id`.
    pub async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        let deactivated = self.merchant_repository.deactivate(id).await?;

        if !deactivated {
            return Err(AppError::not_found(
                "Active merchant not found",
                json!({ "id": id }),
            ));
        }

        let _ = self.cache.invalidate(id).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMerchantRepository;
    use crate::infrastructure::cache::{MockCacheService, NullCache};
    use chrono::Utc;

    fn merchant(id: i64) -> Merchant {
        let now = Utc::now();
        Merchant {
            id,
            name: "Bakso Pak Min".to_string(),
            address: Some("Jl. Ijen 4, Malang".to_string()),
            latitude: -7.97,
            longitude: 112.62,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_missing_merchant_is_not_found() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = MerchantService::new(Arc::new(repo), Arc::new(NullCache));

        let result = service.get(5).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_returns_items_and_total() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_list()
            .times(1)
            .withf(|offset, limit, include_inactive| {
                *offset == 0 && *limit == 25 && !include_inactive
            })
            .returning(|_, _, _| Ok(vec![merchant(1), merchant(2)]));
        repo.expect_count().times(1).returning(|_| Ok(12));

        let service = MerchantService::new(Arc::new(repo), Arc::new(NullCache));

        let (merchants, total) = service.list(0, 25, false).await.unwrap();
        assert_eq!(merchants.len(), 2);
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_update_invalidates_cache() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|id, _| Ok(merchant(id)));

        let mut cache = MockCacheService::new();
        cache
            .expect_invalidate()
            .times(1)
            .withf(|id| *id == 3)
            .returning(|_| Ok(()));

        let service = MerchantService::new(Arc::new(repo), Arc::new(cache));

        let patch = MerchantPatch {
            latitude: Some(-7.95),
            ..Default::default()
        };
        service.update(3, patch).await.unwrap();
    }

    #[tokio::test]
    async fn test_deactivate_missing_merchant_is_not_found() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_deactivate().times(1).returning(|_| Ok(false));

        let mut cache = MockCacheService::new();
        cache.expect_invalidate().times(0);

        let service = MerchantService::new(Arc::new(repo), Arc::new(cache));

        let result = service.deactivate(9).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_deactivate_invalidates_cache() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_deactivate().times(1).returning(|_| Ok(true));

        let mut cache = MockCacheService::new();
        cache.expect_invalidate().times(1).returning(|_| Ok(()));

        let service = MerchantService::new(Arc::new(repo), Arc::new(cache));

        service.deactivate(3).await.unwrap();
    }
}
