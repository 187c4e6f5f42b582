//! Repository trait for API token storage.

use crate::domain::entities::ApiToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for operator API tokens.
///
/// Stores only HMAC hashes of token values; raw tokens never reach the
/// database. Token lifecycle is driven by the `admin` CLI, validation by
/// the authentication middleware.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash under a human-readable name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, name: &str, token_hash: &str) -> Result<(), AppError>;

    /// Returns true if a non-revoked token with this hash exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Stamps `last_used_at` for the given token hash.
    ///
    /// Best-effort; failures are ignored by callers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Lists all tokens, including revoked ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<ApiToken>, AppError>;

    /// Revokes the token with the given name.
    ///
    /// Returns `Ok(true)` if a live token was revoked, `Ok(false)` if no
    /// live token matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke(&self, name: &str) -> Result<bool, AppError>;
}
