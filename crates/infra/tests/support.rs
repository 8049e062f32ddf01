//! Shared fixtures for infra integration tests.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wowapi_domain::{ClientConfig, ClientConfigBuilder};

pub const TOKEN: &str = "integration-token";

/// Config pointing every host at `server`, with short retry delays.
pub fn config_builder(server: &MockServer) -> ClientConfigBuilder {
    ClientConfig::builder("client-id", "client-secret")
        .base_url(server.uri())
        .request_retry_delay(Duration::from_millis(10))
        .request_timeout(Duration::from_secs(5))
        .system_proxy(false)
}

/// Mount the token endpoint, expecting exactly `expected_calls` requests.
pub async fn mount_token_endpoint(server: &MockServer, expires_in: u64, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "expires_in": expires_in,
        })))
        .expect(expected_calls)
        .named("oauth token")
        .mount(server)
        .await;
}
