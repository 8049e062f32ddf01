//! Bounded-concurrency, bounded-retry request executor
//!
//! Every outbound request, token fetches included, passes through one
//! [`RequestGate`]. A request takes a slot from a counting semaphore before
//! its first attempt and keeps it through every retry delay. The slot is an
//! RAII permit, so it is released on success, on final failure, and when the
//! caller drops the future mid-flight.
//!
//! Per request: `Pending -> Attempting -> {Success | RetryWait -> Attempting
//! | FailedFinal}`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use wowapi_core::{HttpTransport, TransportResponse};
use wowapi_domain::{ApiRequest, ClientConfig, Result, WowApiError};

/// Limits applied by a [`RequestGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    /// Concurrency slots. At least 1.
    pub max_parallel_requests: usize,
    /// Total attempts per request. At least 1.
    pub max_attempts: u32,
    /// Fixed wait between attempts.
    pub retry_delay: Duration,
    /// Propagate the last error after the final attempt instead of yielding
    /// `None`.
    pub raise_on_failure: bool,
}

impl GatePolicy {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            max_parallel_requests: config.max_parallel_requests(),
            max_attempts: config.max_request_retries(),
            retry_delay: config.request_retry_delay(),
            raise_on_failure: config.raise_on_failure(),
        }
    }
}

pub struct RequestGate {
    transport: Arc<dyn HttpTransport>,
    permits: Arc<Semaphore>,
    policy: GatePolicy,
}

impl RequestGate {
    pub fn new(transport: Arc<dyn HttpTransport>, policy: GatePolicy) -> Self {
        let policy = GatePolicy {
            max_parallel_requests: policy.max_parallel_requests.max(1),
            max_attempts: policy.max_attempts.max(1),
            ..policy
        };
        Self { transport, permits: Arc::new(Semaphore::new(policy.max_parallel_requests)), policy }
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Slots not currently held by a request.
    pub fn available_slots(&self) -> usize {
        self.permits.available_permits()
    }

    /// Execute `request` under the concurrency cap with fixed-delay retry.
    ///
    /// Returns `Ok(Some(json))` for a 2xx response (`Value::Null` for an empty
    /// body) and `Ok(None)` when every attempt failed and the policy does not
    /// raise.
    ///
    /// # Errors
    /// - The last transient error ([`WowApiError::is_retryable`]) when every
    ///   attempt failed and `raise_on_failure` is set
    /// - Any non-transient error immediately, regardless of the policy
    pub async fn execute(&self, request: &ApiRequest) -> Result<Option<Value>> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| WowApiError::Internal("request gate is closed".into()))?;

        let max_attempts = self.policy.max_attempts;
        let mut attempt = 1;
        loop {
            debug!(attempt, max_attempts, method = %request.method, url = %request.url, "sending request");

            let error = match self.attempt(request).await {
                Ok(value) => return Ok(Some(value)),
                Err(error) if !error.is_retryable() => return Err(error),
                Err(error) => error,
            };

            if attempt >= max_attempts {
                if self.policy.raise_on_failure {
                    warn!(
                        attempts = attempt,
                        url = %request.url,
                        error = %error,
                        category = error.category(),
                        "request failed on final attempt"
                    );
                    return Err(error);
                }
                warn!(
                    attempts = attempt,
                    url = %request.url,
                    error = %error,
                    category = error.category(),
                    "request failed on final attempt, returning no data"
                );
                return Ok(None);
            }

            warn!(
                attempt,
                max_attempts,
                url = %request.url,
                error = %error,
                delay_ms = self.policy.retry_delay.as_millis() as u64,
                "request attempt failed, retrying"
            );
            tokio::time::sleep(self.policy.retry_delay).await;
            attempt += 1;
        }
    }

    async fn attempt(&self, request: &ApiRequest) -> Result<Value> {
        let response = self.transport.send(request).await?;
        parse_response(request, response)
    }
}

fn parse_response(request: &ApiRequest, response: TransportResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(WowApiError::Http { status: response.status, url: request.url.clone() });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|err| WowApiError::Decode(err.to_string()))
}
