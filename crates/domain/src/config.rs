//! Client configuration
//!
//! Built once per client through [`ClientConfig::builder`]. Out-of-range
//! numeric settings are clamped rather than rejected; an unknown region or a
//! locale the region does not support is rejected.

use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_MAX_PARALLEL_REQUESTS, DEFAULT_MAX_REQUEST_RETRIES, DEFAULT_REQUEST_RETRY_DELAY_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::errors::{Result, WowApiError};
use crate::region::{IntoRegion, Region};
use crate::types::BasicCredentials;

/// Where the bearer token goes on game API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPlacement {
    /// `Authorization: Bearer <token>` header.
    #[default]
    Header,
    /// `access_token=<token>` query parameter.
    QueryParam,
}

/// Immutable settings for one client instance.
///
/// `region` and `locale` are the starting values; the client owns the
/// mutable copies.
#[derive(Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: String,
    region: Region,
    locale: String,
    max_parallel_requests: usize,
    max_request_retries: u32,
    request_retry_delay: Duration,
    raise_on_failure: bool,
    token_placement: TokenPlacement,
    request_timeout: Duration,
    user_agent: String,
    base_url: Option<String>,
    system_proxy: bool,
}

impl ClientConfig {
    /// Start building a configuration from project credentials.
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder::new(client_id, client_secret)
    }

    /// Configuration with every default and the given credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let region = Region::default();
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            region,
            locale: region.default_locale().to_string(),
            max_parallel_requests: DEFAULT_MAX_PARALLEL_REQUESTS,
            max_request_retries: DEFAULT_MAX_REQUEST_RETRIES,
            request_retry_delay: Duration::from_secs(DEFAULT_REQUEST_RETRY_DELAY_SECS),
            raise_on_failure: true,
            token_placement: TokenPlacement::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: None,
            system_proxy: true,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Credentials for the OAuth token endpoint.
    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(&self.client_id, &self.client_secret)
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn max_parallel_requests(&self) -> usize {
        self.max_parallel_requests
    }

    pub fn max_request_retries(&self) -> u32 {
        self.max_request_retries
    }

    pub fn request_retry_delay(&self) -> Duration {
        self.request_retry_delay
    }

    pub fn raise_on_failure(&self) -> bool {
        self.raise_on_failure
    }

    pub fn token_placement(&self) -> TokenPlacement {
        self.token_placement
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Origin that replaces both the OAuth and game hosts, if set.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Whether `HTTP_PROXY`/`HTTPS_PROXY` from the environment are honoured.
    pub fn system_proxy(&self) -> bool {
        self.system_proxy
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("max_parallel_requests", &self.max_parallel_requests)
            .field("max_request_retries", &self.max_request_retries)
            .field("request_retry_delay", &self.request_retry_delay)
            .field("raise_on_failure", &self.raise_on_failure)
            .field("token_placement", &self.token_placement)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("system_proxy", &self.system_proxy)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
    region: Result<Region>,
    locale: Option<String>,
}

impl ClientConfigBuilder {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { config: ClientConfig::new(client_id, client_secret), region: Ok(Region::default()), locale: None }
    }

    /// Region by value or case-insensitive identifier. An unknown identifier
    /// surfaces from [`build`](Self::build).
    pub fn region(mut self, region: impl IntoRegion) -> Self {
        self.region = region.into_region();
        self
    }

    /// Locale to start with; defaults to the region's first locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Concurrency cap shared by every request. Values below 1 become 1.
    pub fn max_parallel_requests(mut self, max: usize) -> Self {
        self.config.max_parallel_requests = max.max(1);
        self
    }

    /// Total attempts per request. Values below 1 become 1.
    pub fn max_request_retries(mut self, retries: u32) -> Self {
        self.config.max_request_retries = retries.max(1);
        self
    }

    /// Fixed delay between attempts. A zero delay becomes one second.
    pub fn request_retry_delay(mut self, delay: Duration) -> Self {
        self.config.request_retry_delay = if delay.is_zero() {
            Duration::from_secs(DEFAULT_REQUEST_RETRY_DELAY_SECS)
        } else {
            delay
        };
        self
    }

    /// Delay in whole seconds. Values of zero or less become one second.
    pub fn request_retry_delay_secs(self, seconds: i64) -> Self {
        let seconds = u64::try_from(seconds).unwrap_or(0);
        self.request_retry_delay(Duration::from_secs(seconds))
    }

    /// When false, a request that exhausts its retries yields `None` instead
    /// of the last error.
    pub fn raise_on_failure(mut self, raise: bool) -> Self {
        self.config.raise_on_failure = raise;
        self
    }

    pub fn token_placement(mut self, placement: TokenPlacement) -> Self {
        self.config.token_placement = placement;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Send OAuth and game requests to this origin instead of the region
    /// hosts (proxies, local mocks). A trailing slash is dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Ignore proxy environment variables when `false`. On by default.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.config.system_proxy = enabled;
        self
    }

    /// # Errors
    /// - [`WowApiError::InvalidRegion`] for an unknown region identifier
    /// - [`WowApiError::InvalidLocale`] for a locale the region lacks
    /// - [`WowApiError::Config`] for empty credentials
    pub fn build(self) -> Result<ClientConfig> {
        let mut config = self.config;
        if config.client_id.trim().is_empty() || config.client_secret.trim().is_empty() {
            return Err(WowApiError::Config("client id and client secret must not be empty".into()));
        }

        let region = self.region?;
        config.region = region;
        config.locale = match self.locale {
            Some(locale) => region.validate_locale(&locale)?.to_string(),
            None => region.default_locale().to_string(),
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ClientConfig::builder("id", "secret").build().unwrap();

        assert_eq!(config.region(), Region::Us);
        assert_eq!(config.locale(), "en_US");
        assert_eq!(config.max_parallel_requests(), 50);
        assert_eq!(config.max_request_retries(), 3);
        assert_eq!(config.request_retry_delay(), Duration::from_secs(1));
        assert!(config.raise_on_failure());
        assert_eq!(config.token_placement(), TokenPlacement::Header);
        assert_eq!(config.base_url(), None);
        assert!(config.system_proxy());
    }

    #[test]
    fn numeric_settings_are_floor_clamped() {
        let config = ClientConfig::builder("id", "secret")
            .max_parallel_requests(0)
            .max_request_retries(0)
            .request_retry_delay_secs(-5)
            .build()
            .unwrap();

        assert_eq!(config.max_parallel_requests(), 1);
        assert_eq!(config.max_request_retries(), 1);
        assert_eq!(config.request_retry_delay(), Duration::from_secs(1));

        let config = ClientConfig::builder("id", "secret")
            .request_retry_delay(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(config.request_retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn region_sets_default_locale() {
        let config = ClientConfig::builder("id", "secret").region("eu").build().unwrap();
        assert_eq!(config.region(), Region::Eu);
        assert_eq!(config.locale(), "en_GB");
    }

    #[test]
    fn explicit_locale_must_belong_to_region() {
        let config =
            ClientConfig::builder("id", "secret").region(Region::Eu).locale("fr_FR").build().unwrap();
        assert_eq!(config.locale(), "fr_FR");

        let err = ClientConfig::builder("id", "secret").region("eu").locale("en_US").build();
        assert!(matches!(err, Err(WowApiError::InvalidLocale { .. })));
    }

    #[test]
    fn unknown_region_fails_at_build() {
        let err = ClientConfig::builder("id", "secret").region("atlantis").build();
        assert!(matches!(err, Err(WowApiError::InvalidRegion { .. })));
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let err = ClientConfig::builder("", "secret").build();
        assert!(matches!(err, Err(WowApiError::Config(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config =
            ClientConfig::builder("id", "secret").base_url("http://127.0.0.1:9000/").build().unwrap();
        assert_eq!(config.base_url(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = ClientConfig::builder("id", "very-secret").build().unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
