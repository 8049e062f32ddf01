//! Client context - owns the shared [`ApiClient`] and the accessor groups

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};
use wowapi_core::RealmIndex;
use wowapi_domain::{ClientConfig, Namespace, Region, Result, WowApiError};
use wowapi_infra::{config, ApiClient};

use crate::classic::Classic;
use crate::retail::Retail;
use crate::utils::log_fetch_outcome;

const REALM_INDEX_PATH: &str = "/data/wow/realm/index";

/// Entry point of the crate.
///
/// Builds one [`ApiClient`] and hands a reference to every accessor group,
/// so all of them share the token cache, the concurrency limit and the
/// current region and locale.
pub struct WowApi {
    client: Arc<ApiClient>,
    retail: Retail,
    classic: Classic,
    realm_indexes: Mutex<HashMap<Region, Arc<OnceCell<RealmIndex>>>>,
}

impl WowApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::from_client(Arc::new(ApiClient::new(config)))
    }

    /// Wrap an already configured client, e.g. one built with a custom
    /// transport.
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            retail: Retail::new(client.clone()),
            classic: Classic::new(client.clone()),
            client,
            realm_indexes: Mutex::new(HashMap::new()),
        }
    }

    /// Build from `WOWAPI_*` environment variables, `.env`, or a
    /// `wowapi.toml` / `wowapi.json` file.
    ///
    /// # Errors
    /// [`WowApiError::Config`] when no complete configuration is found.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(config::load()?))
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn retail(&self) -> &Retail {
        &self.retail
    }

    pub fn classic(&self) -> &Classic {
        &self.classic
    }

    /// Resolve a realm name, slug or id to its slug in the current region.
    ///
    /// The realm index is fetched on first use and kept for the lifetime of
    /// this value, one per region. The region is read once, so a concurrent
    /// [`ApiClient::set_region`] cannot file one region's index under
    /// another. A failed fetch is not kept, so the next
    /// call tries again. Returns `None` when nothing matches or the index is
    /// unavailable.
    #[instrument(skip(self))]
    pub async fn realm_slug(&self, query: &str) -> Option<String> {
        let region = self.client.region();
        let cell = self.realm_indexes.lock().entry(region).or_default().clone();

        let index = match cell.get_or_try_init(|| self.fetch_realm_index(region)).await {
            Ok(index) => index,
            Err(err) => {
                warn!(region = %region, error = %err, "realm index unavailable");
                return None;
            }
        };

        let found = index.find_slug(query).map(str::to_string);
        debug!(region = %region, found = found.is_some(), "realm slug lookup");
        found
    }

    async fn fetch_realm_index(&self, region: Region) -> Result<RealmIndex> {
        let namespace = Namespace::DYNAMIC;
        let start = Instant::now();
        let result = self.client.fetch_resource_in(region, &namespace, REALM_INDEX_PATH, &[]).await;
        log_fetch_outcome("realm_slug::realm_index", start.elapsed(), &result);
        let body =
            result?.ok_or_else(|| WowApiError::Network("realm index request failed".into()))?;

        let index = RealmIndex::from_index(&body)
            .ok_or_else(|| WowApiError::Decode("realm index has no realms list".into()))?;
        debug!(region = %region, realms = index.len(), "realm index loaded");
        Ok(index)
    }
}
