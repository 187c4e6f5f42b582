//! Fee quoting service for the checkout flow.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::Merchant;
use crate::domain::geo::GeoPoint;
use crate::domain::pricing::{self, FeeQuote, OrderType};
use crate::domain::quote_event::QuoteEvent;
use crate::domain::repositories::MerchantRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service answering fee quotes for checkout sessions.
///
/// The checkout UI re-quotes on every location or order-type change, so
/// the merchant lookup goes through the cache first. Every served quote
/// also emits a [`QuoteEvent`] for the analytics worker; emission is
/// fire-and-forget and never delays the response.
pub struct QuoteService<M: MerchantRepository> {
    merchant_repository: Arc<M>,
    cache: Arc<dyn CacheService>,
    quote_tx: mpsc::Sender<QuoteEvent>,
}

impl<M: MerchantRepository> QuoteService<M> {
    /// Creates a new quote service.
    pub fn new(
        merchant_repository: Arc<M>,
        cache: Arc<dyn CacheService>,
        quote_tx: mpsc::Sender<QuoteEvent>,
    ) -> Self {
        Self {
            merchant_repository,
            cache,
            quote_tx,
        }
    }

    /// Quotes the fee for an order against the given merchant.
    ///
    /// Pickup quotes ignore `customer` entirely; delivery quotes require
    /// it. The missing-location check lives here, not in the pricing
    /// core, which stays total over its inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the merchant does not exist,
    /// [`AppError::Validation`] if it is inactive or a delivery quote
    /// arrives without a customer location.
    pub async fn quote(
        &self,
        merchant_id: i64,
        customer: Option<GeoPoint>,
        order_type: OrderType,
    ) -> Result<FeeQuote, AppError> {
        let merchant = self.resolve_merchant(merchant_id).await?;

        if !merchant.is_active {
            return Err(AppError::bad_request(
                "Merchant is not accepting orders",
                json!({ "merchant_id": merchant_id }),
            ));
        }

        let quote = match order_type {
            OrderType::Pickup => {
                // The customer point is irrelevant for pickup; any value yields
                // the fixed zero result.
                pricing::quote(merchant.location(), merchant.location(), OrderType::Pickup)
            }
            OrderType::Delivery => {
                let customer = customer.ok_or_else(|| {
                    AppError::bad_request(
                        "Delivery quotes require a customer location",
                        json!({ "merchant_id": merchant_id }),
                    )
                })?;
                pricing::quote(customer, merchant.location(), OrderType::Delivery)
            }
        };

        self.emit_event(merchant_id, order_type, &quote);

        Ok(quote)
    }

    /// Looks up the merchant, cache first, populating the cache on a miss.
    async fn resolve_merchant(&self, merchant_id: i64) -> Result<Merchant, AppError> {
        if let Ok(Some(merchant)) = self.cache.get_merchant(merchant_id).await {
            return Ok(merchant);
        }

        let merchant = self
            .merchant_repository
            .find_by_id(merchant_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Merchant not found", json!({ "merchant_id": merchant_id }))
            })?;

        let _ = self.cache.set_merchant(&merchant, None).await;

        Ok(merchant)
    }

    fn emit_event(&self, merchant_id: i64, order_type: OrderType, quote: &FeeQuote) {
        let event = QuoteEvent::from_quote(merchant_id, order_type, quote);
        if self.quote_tx.try_send(event).is_err() {
            debug!(merchant_id, "Quote event queue full or closed, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::EARTH_RADIUS_M;
    use crate::domain::repositories::MockMerchantRepository;
    use crate::infrastructure::cache::{MockCacheService, NullCache};
    use chrono::Utc;

    fn malang_merchant(id: i64, is_active: bool) -> Merchant {
        let now = Utc::now();
        Merchant {
            id,
            name: "Warung Bu Sri".to_string(),
            address: None,
            latitude: -7.9666,
            longitude: 112.6326,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn customer_at_meters(merchant: &Merchant, meters: f64) -> GeoPoint {
        GeoPoint::new(
            merchant.latitude + (meters / EARTH_RADIUS_M).to_degrees(),
            merchant.longitude,
        )
    }

    fn service(
        repo: MockMerchantRepository,
        cache: Arc<dyn CacheService>,
    ) -> (
        QuoteService<MockMerchantRepository>,
        mpsc::Receiver<QuoteEvent>,
    ) {
        let (tx, rx) = mpsc::channel(8);
        (QuoteService::new(Arc::new(repo), cache, tx), rx)
    }

    #[tokio::test]
    async fn test_delivery_quote_in_free_zone() {
        let merchant = malang_merchant(1, true);
        let customer = customer_at_meters(&merchant, 500.0);

        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, true))));

        let (service, mut rx) = service(repo, Arc::new(NullCache));

        let quote = service
            .quote(1, Some(customer), OrderType::Delivery)
            .await
            .unwrap();

        assert_eq!(quote.fee_amount, 0);
        assert!(quote.is_free_zone);
        assert!((quote.distance_meters - 500.0).abs() < 1.0);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.merchant_id, 1);
        assert_eq!(event.order_type, OrderType::Delivery);
        assert!(event.is_free_zone);
    }

    #[tokio::test]
    async fn test_delivery_quote_beyond_free_zone() {
        let merchant = malang_merchant(1, true);
        let customer = customer_at_meters(&merchant, 2_500.0);

        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, true))));

        let (service, _rx) = service(repo, Arc::new(NullCache));

        let quote = service
            .quote(1, Some(customer), OrderType::Delivery)
            .await
            .unwrap();

        assert_eq!(quote.fee_amount, 3_000);
        assert!(!quote.is_free_zone);
    }

    #[tokio::test]
    async fn test_pickup_quote_needs_no_location() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, true))));

        let (service, mut rx) = service(repo, Arc::new(NullCache));

        let quote = service.quote(1, None, OrderType::Pickup).await.unwrap();

        assert_eq!(quote.fee_amount, 0);
        assert_eq!(quote.distance_meters, 0.0);
        assert!(!quote.is_free_zone);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.order_type, OrderType::Pickup);
    }

    #[tokio::test]
    async fn test_delivery_without_location_is_rejected() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, true))));

        let (service, mut rx) = service(repo, Arc::new(NullCache));

        let result = service.quote(1, None, OrderType::Delivery).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unknown_merchant_is_not_found() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let (service, _rx) = service(repo, Arc::new(NullCache));

        let result = service.quote(99, None, OrderType::Pickup).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_inactive_merchant_is_rejected() {
        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, false))));

        let (service, _rx) = service(repo, Arc::new(NullCache));

        let result = service.quote(1, None, OrderType::Pickup).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_repository() {
        let mut cache = MockCacheService::new();
        cache
            .expect_get_merchant()
            .times(1)
            .returning(|_| Ok(Some(malang_merchant(1, true))));

        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id().times(0);

        let (service, _rx) = service(repo, Arc::new(cache));

        let quote = service.quote(1, None, OrderType::Pickup).await.unwrap();
        assert_eq!(quote.fee_amount, 0);
    }

    #[tokio::test]
    async fn test_cache_miss_populates_cache() {
        let mut cache = MockCacheService::new();
        cache.expect_get_merchant().times(1).returning(|_| Ok(None));
        cache
            .expect_set_merchant()
            .times(1)
            .withf(|merchant, ttl| merchant.id == 1 && ttl.is_none())
            .returning(|_, _| Ok(()));

        let mut repo = MockMerchantRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(malang_merchant(1, true))));

        let (service, _rx) = service(repo, Arc::new(cache));

        service.quote(1, None, OrderType::Pickup).await.unwrap();
    }
}
