//! PostgreSQL repository implementations.
//!
//! Each repository wraps the shared connection pool and implements a
//! domain trait from [`crate::domain::repositories`]. Queries use the
//! runtime query API with bind parameters throughout.

pub mod pg_merchant_repository;
pub mod pg_order_repository;
pub mod pg_quote_log_repository;
pub mod pg_token_repository;

pub use pg_merchant_repository::PgMerchantRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_quote_log_repository::PgQuoteLogRepository;
pub use pg_token_repository::PgTokenRepository;
