//! OAuth token types

use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::constants::TOKEN_EXPIRY_MARGIN_SECS;

/// Body of a successful client-credentials token response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A bearer token with the instant after which it must not be used.
#[derive(Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: Instant,
}

impl CachedToken {
    /// Expiry is `issued_at + expires_in - 60s`, never earlier than `issued_at`.
    pub fn issued(token: String, expires_in_secs: u64, issued_at: Instant) -> Self {
        let lifetime = Duration::from_secs(expires_in_secs.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS));
        Self { token, expires_at: issued_at + lifetime }
    }

    /// Valid while `expires_at > now`.
    pub fn is_valid_at(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

impl fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_subtracts_safety_margin() {
        let now = Instant::now();
        let token = CachedToken::issued("abc".into(), 86_399, now);

        assert_eq!(token.expires_at, now + Duration::from_secs(86_339));
        assert!(token.is_valid_at(now + Duration::from_secs(86_338)));
        assert!(!token.is_valid_at(now + Duration::from_secs(86_339)));
    }

    #[test]
    fn short_lived_tokens_expire_immediately() {
        let now = Instant::now();
        let token = CachedToken::issued("abc".into(), 30, now);
        assert!(!token.is_valid_at(now));
    }

    #[test]
    fn token_response_tolerates_extra_fields() {
        let body = r#"{"access_token":"t","token_type":"bearer","expires_in":86399,"sub":"x"}"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "t");
        assert_eq!(parsed.expires_in, 86_399);
        assert_eq!(parsed.token_type.as_deref(), Some("bearer"));
    }

    #[test]
    fn debug_hides_token() {
        let token = CachedToken::issued("secret-token".into(), 100, Instant::now());
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
