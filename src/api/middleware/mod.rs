//! HTTP middleware: authentication, rate limiting, request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
