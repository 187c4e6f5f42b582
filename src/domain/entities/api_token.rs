//! API token entity for operator authentication.

use chrono::{DateTime, Utc};

/// A stored API token.
///
/// Only the HMAC of the token value is persisted; the raw value is shown
/// once at creation time and cannot be recovered.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    /// Returns true if the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoked_flag() {
        let now = Utc::now();
        let mut token = ApiToken {
            id: 1,
            name: "dashboard".to_string(),
            token_hash: "ab".repeat(32),
            created_at: now,
            last_used_at: None,
            revoked_at: None,
        };
        assert!(!token.is_revoked());

        token.revoked_at = Some(now);
        assert!(token.is_revoked());
    }
}
