//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations
//! live in `crate::infrastructure::persistence`, and mock implementations
//! are auto-generated via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`MerchantRepository`] - Merchant registry CRUD
//! - [`OrderRepository`] - Order persistence and listing
//! - [`QuoteLogRepository`] - Append-only quote analytics log
//! - [`TokenRepository`] - Operator API token storage

pub mod merchant_repository;
pub mod order_repository;
pub mod quote_log_repository;
pub mod token_repository;

pub use merchant_repository::MerchantRepository;
pub use order_repository::OrderRepository;
pub use quote_log_repository::QuoteLogRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use merchant_repository::MockMerchantRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use quote_log_repository::MockQuoteLogRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
