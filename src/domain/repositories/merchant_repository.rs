//! Repository trait for merchant registry access.

use crate::domain::entities::{Merchant, MerchantPatch, NewMerchant};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the merchant registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMerchantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantRepository: Send + Sync {
    /// Registers a new merchant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a merchant with the same name
    /// already exists. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, AppError>;

    /// Finds a merchant by id, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Merchant>, AppError>;

    /// Lists merchants ordered by creation time, newest first.
    ///
    /// Inactive merchants are excluded unless `include_inactive` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        include_inactive: bool,
    ) -> Result<Vec<Merchant>, AppError>;

    /// Counts merchants, subject to the same `include_inactive` filter as
    /// [`Self::list`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, include_inactive: bool) -> Result<i64, AppError>;

    /// Partially updates a merchant. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no merchant matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: MerchantPatch) -> Result<Merchant, AppError>;

    /// Deactivates a merchant, keeping it in the registry for order history.
    ///
    /// Returns `Ok(true)` if the merchant was active and is now inactive,
    /// `Ok(false)` if not found or already inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, id: i64) -> Result<bool, AppError>;
}
