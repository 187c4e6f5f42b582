//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{AuthService, MerchantService, OrderService, QuoteService};
use crate::config::Config;
use crate::domain::quote_worker::run_quote_worker;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    PgMerchantRepository, PgOrderRepository, PgQuoteLogRepository, PgTokenRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache (or NullCache fallback)
/// - Background quote analytics worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, server bind,
/// or server runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let (quote_tx, quote_rx) = mpsc::channel(config.quote_queue_capacity);

    let pool = Arc::new(pool);
    let merchant_repository = Arc::new(PgMerchantRepository::new(pool.clone()));
    let order_repository = Arc::new(PgOrderRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));
    let quote_log_repository = Arc::new(PgQuoteLogRepository::new(pool.clone()));

    tokio::spawn(run_quote_worker(quote_rx, quote_log_repository));
    tracing::info!("Quote worker started");

    let state = AppState {
        quote_service: Arc::new(QuoteService::new(
            merchant_repository.clone(),
            cache.clone(),
            quote_tx.clone(),
        )),
        merchant_service: Arc::new(MerchantService::new(
            merchant_repository.clone(),
            cache.clone(),
        )),
        order_service: Arc::new(OrderService::new(merchant_repository, order_repository)),
        auth_service: Arc::new(AuthService::new(
            token_repository,
            config.token_signing_secret.clone(),
        )),
        cache,
        quote_sender: quote_tx,
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
