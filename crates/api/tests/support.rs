//! Shared fixtures for facade integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wowapi::{ClientConfig, ClientConfigBuilder, WowApi};

pub const TOKEN: &str = "facade-token";

/// Config pointing every host at `server`, with short retry delays.
pub fn config_builder(server: &MockServer) -> ClientConfigBuilder {
    ClientConfig::builder("client-id", "client-secret")
        .base_url(server.uri())
        .request_retry_delay(Duration::from_millis(10))
        .request_timeout(Duration::from_secs(5))
        .system_proxy(false)
}

/// Mount a token endpoint that accepts any number of requests.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "expires_in": 86_399,
        })))
        .named("oauth token")
        .mount(server)
        .await;
}

/// A `WowApi` for `region`, with the token endpoint already mounted.
pub async fn api_for(server: &MockServer, region: &str) -> WowApi {
    mount_token(server).await;
    let config = config_builder(server).region(region).build().expect("valid config");
    WowApi::new(config)
}
