//! Rate limiting middleware using token bucket algorithm.
//!
//! Two tiers: a generous one for the public quote/order endpoints (the
//! checkout UI re-quotes on every map drag) and a strict one for admin
//! endpoints. Each tier has a peer-address variant and a proxy variant
//! that trusts `X-Forwarded-For` / `X-Real-IP`; pick the proxy variants
//! only behind a trusted reverse proxy.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests per second for public endpoints.
const PUBLIC_PER_SECOND: u64 = 10;
/// Burst size for public endpoints.
const PUBLIC_BURST: u32 = 50;

/// Requests per second for admin endpoints.
const ADMIN_PER_SECOND: u64 = 2;
/// Burst size for admin endpoints.
const ADMIN_BURST: u32 = 10;

/// Rate limiter for public endpoints, keyed by socket peer address.
pub fn public_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PUBLIC_PER_SECOND)
            .burst_size(PUBLIC_BURST)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for public endpoints, keyed by forwarded client address.
pub fn public_proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PUBLIC_PER_SECOND)
            .burst_size(PUBLIC_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for admin endpoints, keyed by socket peer address.
pub fn admin_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(ADMIN_PER_SECOND)
            .burst_size(ADMIN_BURST)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for admin endpoints, keyed by forwarded client address.
pub fn admin_proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(ADMIN_PER_SECOND)
            .burst_size(ADMIN_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
