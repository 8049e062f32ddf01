//! Port interfaces for outbound I/O
//!
//! The request gate and the OAuth service only ever talk to these traits,
//! so tests can swap in instrumented fakes for the real HTTP stack.

use async_trait::async_trait;
use wowapi_domain::{ApiRequest, Region, Result};

/// Raw outcome of one HTTP exchange.
///
/// A non-2xx status is not an error at this level; the caller decides what
/// to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Status in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single HTTP request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one attempt. Network-level failures return
    /// [`wowapi_domain::WowApiError::Network`].
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse>;

    /// Start reusing one connection pool for subsequent requests.
    ///
    /// Sessions nest: every `open_session` must be paired with a
    /// `close_session`.
    fn open_session(&self) -> Result<()> {
        Ok(())
    }

    /// Release the pool opened by the matching `open_session`.
    fn close_session(&self) {}
}

/// Hands out a valid bearer token for a region.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// # Errors
    /// [`wowapi_domain::WowApiError::AccessToken`] when no token could be
    /// obtained.
    async fn access_token(&self, region: Region) -> Result<String>;

    /// Forget any cached token for `region`.
    fn invalidate(&self, _region: Region) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx_only() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(TransportResponse::new(299, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(300, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(503, "").is_success());
    }
}
