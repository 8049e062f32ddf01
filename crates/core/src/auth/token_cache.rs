//! Per-region bearer token cache
//!
//! Holds at most one token per region. A token is served while
//! `expires_at > now`; otherwise the caller-supplied fetch runs once and its
//! result replaces the entry.
//!
//! There is no single-flight lock: concurrent refreshes of the same expired
//! region may each hit the token endpoint, and the last one to finish wins.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use wowapi_common::{Clock, SystemClock};
use wowapi_domain::{CachedToken, Region, Result, TokenResponse, WowApiError};

pub struct TokenCache<C: Clock = SystemClock> {
    clock: C,
    tokens: RwLock<HashMap<Region, CachedToken>>,
}

impl TokenCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TokenCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TokenCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, tokens: RwLock::new(HashMap::new()) }
    }

    /// Cached token for `region` if it has not expired.
    pub fn get(&self, region: Region) -> Option<String> {
        let now = self.clock.now();
        self.tokens
            .read()
            .get(&region)
            .filter(|cached| cached.is_valid_at(now))
            .map(|cached| cached.token.clone())
    }

    /// Store a fresh token response, overwriting any previous entry, and
    /// return the token.
    pub fn store(&self, region: Region, response: TokenResponse) -> String {
        let cached = CachedToken::issued(response.access_token, response.expires_in, self.clock.now());
        let token = cached.token.clone();
        self.tokens.write().insert(region, cached);
        token
    }

    /// Drop the entry for `region`. Returns whether one existed.
    pub fn invalidate(&self, region: Region) -> bool {
        self.tokens.write().remove(&region).is_some()
    }

    /// Regions that have an entry, expired or not, in declaration order.
    pub fn cached_regions(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = self.tokens.read().keys().copied().collect();
        regions.sort();
        regions
    }

    /// Return the cached token or obtain a new one through `fetch`.
    ///
    /// `fetch` yields `Ok(None)` when the token endpoint produced nothing
    /// after the request gate gave up.
    ///
    /// # Errors
    /// [`WowApiError::AccessToken`] for every failure of `fetch`, an empty
    /// result, or a response without a token.
    pub async fn get_or_refresh<F, Fut>(&self, region: Region, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<TokenResponse>>>,
    {
        if let Some(token) = self.get(region) {
            debug!(region = %region, "using cached access token");
            return Ok(token);
        }

        debug!(region = %region, "access token missing or expired, refreshing");
        let response = match fetch().await {
            Ok(Some(response)) if !response.access_token.is_empty() => response,
            Ok(Some(_)) => {
                warn!(region = %region, "token endpoint returned an empty access token");
                return Err(WowApiError::AccessToken("empty access_token in response".into()));
            }
            Ok(None) => {
                warn!(region = %region, "token endpoint returned no data");
                return Err(WowApiError::AccessToken("no response from token endpoint".into()));
            }
            Err(WowApiError::AccessToken(reason)) => return Err(WowApiError::AccessToken(reason)),
            Err(err) => {
                warn!(region = %region, error = %err, category = err.category(), "token request failed");
                return Err(WowApiError::AccessToken(err.to_string()));
            }
        };

        info!(region = %region, expires_in = response.expires_in, "access token refreshed");
        Ok(self.store(region, response))
    }
}
