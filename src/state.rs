//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, MerchantService, OrderService, QuoteService};
use crate::domain::quote_event::QuoteEvent;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgMerchantRepository, PgOrderRepository, PgTokenRepository,
};

/// Shared state for all request handlers.
///
/// Services are concrete over the PostgreSQL repositories; handler unit
/// tests that need doubles exercise the services directly instead.
#[derive(Clone)]
pub struct AppState {
    pub quote_service: Arc<QuoteService<PgMerchantRepository>>,
    pub merchant_service: Arc<MerchantService<PgMerchantRepository>>,
    pub order_service: Arc<OrderService<PgMerchantRepository, PgOrderRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub quote_sender: mpsc::Sender<QuoteEvent>,
}
