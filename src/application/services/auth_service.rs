//! Authentication service for operator API tokens.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Length of random bytes behind a token value; encodes to 32 characters.
const TOKEN_LENGTH_BYTES: usize = 24;

/// Service for issuing and authenticating Bearer tokens.
///
/// Token values are hashed with HMAC-SHA256 (keyed by `signing_secret`)
/// before storage and comparison, so database access alone is not enough
/// to verify or forge a token.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when existing tokens
    /// were issued, otherwise none of them will validate.
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token value into its 64-character hex storage form.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw Bearer token.
    ///
    /// Stamps `last_used_at` on success; the stamp is best-effort and its
    /// failure does not fail the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown or revoked tokens,
    /// [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(token);

        let is_valid = self.repository.validate_token(&token_hash).await?;

        if !is_valid {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or revoked token" }),
            ));
        }

        let _ = self.repository.update_last_used(&token_hash).await;

        Ok(())
    }

    /// Issues a new token under `name` and returns the raw value.
    ///
    /// The raw value is shown exactly once; only its hash is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken,
    /// [`AppError::Internal`] on database errors.
    pub async fn issue_token(&self, name: &str) -> Result<String, AppError> {
        let value = generate_token_value();
        self.repository.insert(name, &self.hash_token(&value)).await?;

        Ok(value)
    }
}

/// Generates a random token value from OS entropy.
///
/// URL-safe base64 without padding, 32 characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn generate_token_value() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
