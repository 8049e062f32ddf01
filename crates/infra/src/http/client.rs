use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Client as ReqwestClient, Method};
use tracing::debug;
use url::Url;
use wowapi_core::{HttpTransport, TransportResponse};
use wowapi_domain::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use wowapi_domain::{ApiRequest, ClientConfig, HttpMethod, Result, WowApiError};

use crate::errors::InfraError;

/// Pooled client shared by every request while at least one session is open.
struct Session {
    client: ReqwestClient,
    depth: usize,
}

/// [`HttpTransport`] backed by `reqwest`.
///
/// Outside a session each request builds its own client, and with it its own
/// connection pool, which is torn down when the request finishes. Between
/// `open_session` and the matching `close_session` one client is reused.
pub struct ReqwestTransport {
    timeout: Duration,
    user_agent: String,
    system_proxy: bool,
    session: Mutex<Option<Session>>,
}

impl ReqwestTransport {
    /// Start building a new transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Transport using the timeout and user agent from `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .system_proxy(config.system_proxy())
            .build()
    }

    /// Whether a pooled session is currently open.
    pub fn has_session(&self) -> bool {
        self.session.lock().is_some()
    }

    fn build_client(&self) -> Result<ReqwestClient> {
        let builder =
            ReqwestClient::builder().timeout(self.timeout).user_agent(self.user_agent.as_str());
        let builder = if self.system_proxy { builder } else { builder.no_proxy() };
        builder.build().map_err(|err| WowApiError::from(InfraError::from(err)))
    }

    fn client(&self) -> Result<ReqwestClient> {
        if let Some(session) = self.session.lock().as_ref() {
            return Ok(session.client.clone());
        }
        self.build_client()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse> {
        let client = self.client()?;
        let url = Url::parse_with_params(&request.url, &request.query)
            .map_err(|err| WowApiError::Internal(format!("invalid URL {}: {err}", request.url)))?;
        let method = to_reqwest_method(request.method);

        let mut builder = client.request(method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(credentials) = &request.basic_auth {
            builder = builder.basic_auth(&credentials.username, Some(credentials.password()));
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response =
            builder.send().await.map_err(|err| WowApiError::from(InfraError::from(err)))?;
        let status = response.status().as_u16();
        debug!(%method, url = %request.url, status, "received HTTP response");

        let body = response.text().await.map_err(|err| WowApiError::from(InfraError::from(err)))?;
        Ok(TransportResponse { status, body })
    }

    fn open_session(&self) -> Result<()> {
        let mut session = self.session.lock();
        match session.as_mut() {
            Some(open) => open.depth += 1,
            None => {
                *session = Some(Session { client: self.build_client()?, depth: 1 });
                debug!("opened pooled HTTP session");
            }
        }
        Ok(())
    }

    fn close_session(&self) {
        let mut session = self.session.lock();
        if let Some(open) = session.as_mut() {
            open.depth -= 1;
            if open.depth == 0 {
                *session = None;
                debug!("closed pooled HTTP session");
            }
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    timeout: Duration,
    user_agent: String,
    system_proxy: bool,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            system_proxy: true,
        }
    }
}

impl ReqwestTransportBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Honour proxy environment variables. On by default.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    pub fn build(self) -> ReqwestTransport {
        ReqwestTransport {
            timeout: self.timeout,
            user_agent: self.user_agent,
            system_proxy: self.system_proxy,
            session: Mutex::new(None),
        }
    }
}
