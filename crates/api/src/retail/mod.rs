//! Retail World of Warcraft accessors

pub mod game_data;
pub mod profile;

use std::sync::Arc;

use wowapi_infra::ApiClient;

pub use game_data::RetailGameData;
pub use profile::RetailProfile;

/// Retail accessor groups sharing one [`ApiClient`].
#[derive(Clone)]
pub struct Retail {
    game_data: RetailGameData,
    profile: RetailProfile,
}

impl Retail {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { game_data: RetailGameData::new(client.clone()), profile: RetailProfile::new(client) }
    }

    pub fn game_data(&self) -> &RetailGameData {
        &self.game_data
    }

    pub fn profile(&self) -> &RetailProfile {
        &self.profile
    }
}
