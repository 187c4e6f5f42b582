//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: DB, cache, quote queue (public)
//! - `/api/*`             - Guest checkout: quote, orders, merchant browsing (public)
//! - `/api/admin/*`       - Operator endpoints (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, generous for checkout and
//!   strict for admin (configurable for proxy deployments)
//! - **Authentication** - Bearer token on admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads the client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let admin = if behind_proxy {
        admin.layer(rate_limit::admin_proxy_layer())
    } else {
        admin.layer(rate_limit::admin_layer())
    };

    let public = api::routes::public_routes();
    let public = if behind_proxy {
        public.layer(rate_limit::public_proxy_layer())
    } else {
        public.layer(rate_limit::public_layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", public.nest("/admin", admin))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
