//! Repository trait for order persistence.

use crate::domain::entities::{NewOrder, Order};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for submitted orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order with its fee snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced merchant does not
    /// exist. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Finds an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists orders ordered by submission time, newest first, optionally
    /// filtered by merchant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        merchant_id: Option<i64>,
    ) -> Result<Vec<Order>, AppError>;

    /// Counts orders, optionally filtered by merchant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, merchant_id: Option<i64>) -> Result<i64, AppError>;
}
