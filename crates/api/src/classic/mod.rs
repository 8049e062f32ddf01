//! Classic World of Warcraft accessors

pub mod game_data;

use std::sync::Arc;

use wowapi_infra::ApiClient;

pub use game_data::ClassicGameData;

/// Classic accessor groups sharing one [`ApiClient`].
#[derive(Clone)]
pub struct Classic {
    game_data: ClassicGameData,
}

impl Classic {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { game_data: ClassicGameData::new(client) }
    }

    pub fn game_data(&self) -> &ClassicGameData {
        &self.game_data
    }
}
