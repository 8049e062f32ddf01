//! Accessor helpers
//!
//! Every accessor is the same three steps: format a path, pick a namespace,
//! fetch. These helpers add timing and outcome logging around the fetch.

use std::time::Instant;

use serde_json::Value;
use wowapi_domain::{Namespace, Result};
use wowapi_infra::ApiClient;

use crate::utils::logging::log_fetch_outcome;

/// Fetch through `client` and log the outcome under `endpoint`.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn token_index(&self) -> Result<Option<Value>> {
///     timed_fetch(&self.client, "retail::token_index", &Namespace::DYNAMIC, "/data/wow/token/index", &[]).await
/// }
/// ```
pub async fn timed_fetch(
    client: &ApiClient,
    endpoint: &str,
    namespace: &Namespace,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Option<Value>> {
    let start = Instant::now();
    let result = client.fetch_resource(namespace, path, params).await;
    log_fetch_outcome(endpoint, start.elapsed(), &result);
    result
}

/// Lower-case a realm slug or character name for use in a profile path.
pub fn slug(value: &str) -> String {
    value.trim().to_lowercase()
}
