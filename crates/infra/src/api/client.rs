//! Region/locale-aware API client
//!
//! Resource accessors call [`ApiClient::fetch_resource`] with a namespace
//! template and an endpoint path. The client resolves the current region and
//! locale, obtains a bearer token and sends the request through the shared
//! [`RequestGate`].
//!
//! Region and locale live behind one lock and are read together once at the
//! start of each request. A request in flight keeps the values it started
//! with even if [`ApiClient::set_region`] runs concurrently.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, instrument};
use wowapi_common::{Clock, SystemClock};
use wowapi_core::{AccessTokenProvider, HttpTransport};
use wowapi_domain::constants::{PARAM_ACCESS_TOKEN, PARAM_LOCALE, PARAM_NAMESPACE};
use wowapi_domain::{
    ApiRequest, ClientConfig, HttpMethod, IntoRegion, Namespace, Region, Result, TokenPlacement,
};

use super::auth::OAuthTokenService;
use crate::http::{GatePolicy, ReqwestTransport, RequestGate};

#[derive(Debug, Clone)]
struct RegionState {
    region: Region,
    locale: String,
}

/// Entry point shared by all resource accessors.
pub struct ApiClient {
    config: ClientConfig,
    state: RwLock<RegionState>,
    transport: Arc<dyn HttpTransport>,
    gate: Arc<RequestGate>,
    auth: Arc<dyn AccessTokenProvider>,
}

impl ApiClient {
    /// Create a client that talks to the real API over `reqwest`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::from_config(&config));
        Self::with_transport(config, transport)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_clock(config, transport, SystemClock)
    }

    /// Create a client whose token expiry is measured with `clock`.
    pub fn with_clock<C: Clock + 'static>(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        clock: C,
    ) -> Self {
        let gate = Arc::new(RequestGate::new(transport.clone(), GatePolicy::from_config(&config)));
        let auth = Arc::new(OAuthTokenService::with_clock(
            gate.clone(),
            config.credentials(),
            config.base_url().map(str::to_string),
            clock,
        ));
        Self::from_parts(config, transport, gate, auth)
    }

    /// Assemble a client from already-built parts. `auth` should send its
    /// own requests through `gate`.
    pub fn from_parts(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        gate: Arc<RequestGate>,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let state = RegionState { region: config.region(), locale: config.locale().to_string() };
        Self { config, state: RwLock::new(state), transport, gate, auth }
    }

    /// Settings the client was built with. Region and locale here are the
    /// initial values; see [`region`](Self::region) and
    /// [`locale`](Self::locale) for the current ones.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn region(&self) -> Region {
        self.state.read().region
    }

    pub fn locale(&self) -> String {
        self.state.read().locale.clone()
    }

    /// Switch region and reset the locale to the region's default.
    ///
    /// # Errors
    /// [`wowapi_domain::WowApiError::InvalidRegion`]; the client is left
    /// unchanged.
    pub fn set_region(&self, region: impl IntoRegion) -> Result<()> {
        let region = region.into_region()?;
        let locale = region.default_locale();
        *self.state.write() = RegionState { region, locale: locale.to_string() };
        info!(region = %region, locale, "region changed");
        Ok(())
    }

    /// Switch locale within the current region.
    ///
    /// # Errors
    /// [`wowapi_domain::WowApiError::InvalidLocale`] when the current region
    /// does not support `locale`; the previous locale is kept.
    pub fn set_locale(&self, locale: &str) -> Result<()> {
        let mut state = self.state.write();
        let locale = state.region.validate_locale(locale)?;
        state.locale = locale.to_string();
        info!(region = %state.region, locale, "locale changed");
        Ok(())
    }

    /// Drop the cached token for `region` so the next request fetches one.
    pub fn invalidate_token(&self, region: Region) {
        self.auth.invalidate(region);
    }

    /// `GET` a game API resource.
    ///
    /// `namespace` is rendered for the current region, and `namespace`,
    /// `locale` and (with [`TokenPlacement::QueryParam`]) `access_token`
    /// override same-named entries in `params`.
    ///
    /// Returns `Ok(None)` only when the request failed and the client was
    /// configured not to raise.
    ///
    /// # Errors
    /// - [`wowapi_domain::WowApiError::AccessToken`] when no token could be
    ///   obtained
    /// - The final transport or HTTP error when `raise_on_failure` is set
    pub async fn fetch_resource(
        &self,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        self.fetch(HttpMethod::Get, namespace, path, params).await
    }

    /// Like [`fetch_resource`](Self::fetch_resource) with an explicit method
    /// name (`GET`, `POST`, `PUT` or `DELETE`, any case).
    ///
    /// # Errors
    /// [`wowapi_domain::WowApiError::UnsupportedMethod`] before anything is
    /// sent, otherwise as for `fetch_resource`.
    pub async fn fetch_resource_with(
        &self,
        method: &str,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let method = HttpMethod::parse(method)?;
        self.fetch(method, namespace, path, params).await
    }

    /// `GET` a resource in `region` regardless of the client's current
    /// region. The current locale is used when it belongs to `region`,
    /// otherwise the region's default locale.
    ///
    /// # Errors
    /// As for [`fetch_resource`](Self::fetch_resource).
    pub async fn fetch_resource_in(
        &self,
        region: Region,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let state = {
            let current = self.state.read();
            if current.region == region {
                current.clone()
            } else {
                RegionState { region, locale: region.default_locale().to_string() }
            }
        };
        self.fetch_with(state, HttpMethod::Get, namespace, path, params).await
    }

    async fn fetch(
        &self,
        method: HttpMethod,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let state = self.state.read().clone();
        self.fetch_with(state, method, namespace, path, params).await
    }

    #[instrument(skip(self, state, params), fields(region = %state.region, namespace = %namespace))]
    async fn fetch_with(
        &self,
        state: RegionState,
        method: HttpMethod,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let RegionState { region, locale } = state;
        let token = self.auth.access_token(region).await?;

        let mut request = ApiRequest::new(method, self.game_url(region, path));
        for (key, value) in params {
            request = request.with_query(*key, *value);
        }
        request = request
            .with_query(PARAM_NAMESPACE, namespace.render(region))
            .with_query(PARAM_LOCALE, locale);
        request = match self.config.token_placement() {
            TokenPlacement::Header => request.with_header("Authorization", format!("Bearer {token}")),
            TokenPlacement::QueryParam => request.with_query(PARAM_ACCESS_TOKEN, token),
        };

        self.gate.execute(&request).await
    }

    fn game_url(&self, region: Region, path: &str) -> String {
        match self.config.base_url() {
            Some(base) => format!("{base}{path}"),
            None => region.hosts().game_url(path),
        }
    }

    /// Run fetches concurrently and return their results in submission
    /// order. Concurrency is still capped by the shared gate. An empty input
    /// yields an empty vector.
    pub async fn multi_fetch<I, F>(&self, fetches: I) -> Vec<F::Output>
    where
        I: IntoIterator<Item = F>,
        F: Future,
    {
        let fetches: Vec<F> = fetches.into_iter().collect();
        debug!(count = fetches.len(), available_slots = self.gate.available_slots(), "multi fetch");
        join_all(fetches).await
    }

    /// Reuse one connection pool until [`close_session`](Self::close_session).
    ///
    /// # Errors
    /// When the transport cannot create its pooled client.
    pub fn open_session(&self) -> Result<()> {
        self.transport.open_session()
    }

    pub fn close_session(&self) {
        self.transport.close_session();
    }

    /// Open a session that closes when the returned guard is dropped.
    ///
    /// # Errors
    /// As for [`open_session`](Self::open_session).
    pub fn session(&self) -> Result<SessionGuard> {
        self.transport.open_session()?;
        Ok(SessionGuard { transport: self.transport.clone() })
    }

    /// Run `f` inside a session. The session is closed when `f` completes,
    /// fails, or the returned future is dropped.
    ///
    /// # Errors
    /// As for [`open_session`](Self::open_session); errors from `f` are part
    /// of its output.
    pub async fn scoped<'a, F, Fut>(&'a self, f: F) -> Result<Fut::Output>
    where
        F: FnOnce(&'a Self) -> Fut,
        Fut: Future,
    {
        let _session = self.session()?;
        Ok(f(self).await)
    }
}

/// Closes the transport session on drop.
#[must_use = "the session closes as soon as the guard is dropped"]
pub struct SessionGuard {
    transport: Arc<dyn HttpTransport>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.transport.close_session();
    }
}
