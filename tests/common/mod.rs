#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use delivery_pricing::application::services::{
    AuthService, MerchantService, OrderService, QuoteService,
};
use delivery_pricing::domain::geo::EARTH_RADIUS_M;
use delivery_pricing::domain::quote_event::QuoteEvent;
use delivery_pricing::infrastructure::cache::{CacheService, NullCache};
use delivery_pricing::infrastructure::persistence::{
    PgMerchantRepository, PgOrderRepository, PgTokenRepository,
};
use delivery_pricing::state::AppState;

/// Malang city center, used as the merchant anchor in tests.
pub const MALANG: (f64, f64) = (-7.9666, 112.6326);

/// Returns `(latitude, longitude)` a given number of meters due north of
/// `origin`. Along a meridian the haversine distance equals the offset up
/// to float rounding, which keeps expected fees exact.
pub fn offset_north(origin: (f64, f64), meters: f64) -> (f64, f64) {
    (origin.0 + (meters / EARTH_RADIUS_M).to_degrees(), origin.1)
}

pub async fn create_test_merchant(pool: &PgPool, name: &str, latitude: f64, longitude: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO merchants (name, latitude, longitude) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(latitude)
    .bind(longitude)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn deactivate_merchant(pool: &PgPool, id: i64) {
    sqlx::query("UPDATE merchants SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<QuoteEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let merchant_repo = Arc::new(PgMerchantRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

    let cache: Arc<dyn CacheService> = Arc::new(NullCache);

    let state = AppState {
        quote_service: Arc::new(QuoteService::new(
            merchant_repo.clone(),
            cache.clone(),
            tx.clone(),
        )),
        merchant_service: Arc::new(MerchantService::new(merchant_repo.clone(), cache.clone())),
        order_service: Arc::new(OrderService::new(merchant_repo, order_repo)),
        auth_service: Arc::new(AuthService::new(
            token_repo,
            "test-signing-secret".to_string(),
        )),
        cache,
        quote_sender: tx,
    };

    (state, rx)
}
