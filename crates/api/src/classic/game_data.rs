//! Classic game data (`static-classic-{region}` and
//! `dynamic-classic-{region}` namespaces)

use std::sync::Arc;

use serde_json::Value;
use wowapi_domain::{Namespace, Result};
use wowapi_infra::ApiClient;

use crate::utils::{slug, timed_fetch};

/// Classic game data accessors.
#[derive(Clone)]
pub struct ClassicGameData {
    client: Arc<ApiClient>,
}

impl ClassicGameData {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn fetch(
        &self,
        endpoint: &str,
        namespace: &Namespace,
        path: &str,
    ) -> Result<Option<Value>> {
        timed_fetch(&self.client, endpoint, namespace, path, &[]).await
    }

    async fn search(
        &self,
        endpoint: &str,
        namespace: &Namespace,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        timed_fetch(&self.client, endpoint, namespace, path, params).await
    }

    // Auction house

    /// Auction houses (alliance, horde, neutral) of a connected realm.
    pub async fn auction_house_index(&self, connected_realm_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/connected-realm/{connected_realm_id}/auctions/index");
        self.fetch("classic::auction_house_index", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn auctions(
        &self,
        connected_realm_id: u64,
        auction_house_id: u64,
    ) -> Result<Option<Value>> {
        let path =
            format!("/data/wow/connected-realm/{connected_realm_id}/auctions/{auction_house_id}");
        self.fetch("classic::auctions", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    // Connected realms

    pub async fn connected_realms_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::connected_realms_index",
            &Namespace::DYNAMIC_CLASSIC,
            "/data/wow/connected-realm/index",
        )
        .await
    }

    pub async fn connected_realm(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/connected-realm/{id}");
        self.fetch("classic::connected_realm", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn search_connected_realms(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "classic::search_connected_realms",
            &Namespace::DYNAMIC_CLASSIC,
            "/data/wow/search/connected-realm",
            params,
        )
        .await
    }

    // Creatures

    pub async fn creature_families_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::creature_families_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/creature-family/index",
        )
        .await
    }

    pub async fn creature_family(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature-family/{id}");
        self.fetch("classic::creature_family", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn creature_types_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::creature_types_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/creature-type/index",
        )
        .await
    }

    pub async fn creature_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature-type/{id}");
        self.fetch("classic::creature_type", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn creature(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature/{id}");
        self.fetch("classic::creature", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn search_creatures(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "classic::search_creatures",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/search/creature",
            params,
        )
        .await
    }

    pub async fn creature_display_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/creature-display/{id}");
        self.fetch("classic::creature_display_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn creature_family_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/creature-family/{id}");
        self.fetch("classic::creature_family_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    // Guild crest

    pub async fn guild_crest_components_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::guild_crest_components_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/guild-crest/index",
        )
        .await
    }

    pub async fn guild_crest_border_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/guild-crest/border/{id}");
        self.fetch("classic::guild_crest_border_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn guild_crest_emblem_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/guild-crest/emblem/{id}");
        self.fetch("classic::guild_crest_emblem_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    // Items

    pub async fn item_classes_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::item_classes_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/item-class/index",
        )
        .await
    }

    pub async fn item_class(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/item-class/{id}");
        self.fetch("classic::item_class", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn item_subclass(
        &self,
        item_class_id: u64,
        item_subclass_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/item-class/{item_class_id}/item-subclass/{item_subclass_id}");
        self.fetch("classic::item_subclass", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn item(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/item/{id}");
        self.fetch("classic::item", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn item_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/item/{id}");
        self.fetch("classic::item_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn search_items(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "classic::search_items",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/search/item",
            params,
        )
        .await
    }

    // Media

    pub async fn search_media(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "classic::search_media",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/search/media",
            params,
        )
        .await
    }

    // Playable classes and races

    pub async fn playable_classes_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::playable_classes_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/playable-class/index",
        )
        .await
    }

    pub async fn playable_class(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-class/{id}");
        self.fetch("classic::playable_class", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn playable_class_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/playable-class/{id}");
        self.fetch("classic::playable_class_media", &Namespace::STATIC_CLASSIC, &path).await
    }

    pub async fn playable_races_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::playable_races_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/playable-race/index",
        )
        .await
    }

    pub async fn playable_race(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-race/{id}");
        self.fetch("classic::playable_race", &Namespace::STATIC_CLASSIC, &path).await
    }

    // Power types

    pub async fn power_types_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::power_types_index",
            &Namespace::STATIC_CLASSIC,
            "/data/wow/power-type/index",
        )
        .await
    }

    pub async fn power_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/power-type/{id}");
        self.fetch("classic::power_type", &Namespace::STATIC_CLASSIC, &path).await
    }

    // PvP seasons

    pub async fn pvp_seasons_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::pvp_seasons_index",
            &Namespace::DYNAMIC_CLASSIC,
            "/data/wow/pvp-season/index",
        )
        .await
    }

    pub async fn pvp_season(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-season/{id}");
        self.fetch("classic::pvp_season", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    // PvP regions

    /// PvP regions group connected realms; regional seasons and leaderboards
    /// hang off a PvP region id.
    pub async fn pvp_regions_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "classic::pvp_regions_index",
            &Namespace::DYNAMIC_CLASSIC,
            "/data/wow/pvp-region/index",
        )
        .await
    }

    pub async fn pvp_regional_seasons_index(&self, pvp_region_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-region/{pvp_region_id}/pvp-season/index");
        self.fetch("classic::pvp_regional_seasons_index", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn pvp_regional_season(
        &self,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}");
        self.fetch("classic::pvp_regional_season", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn pvp_leaderboards_index(
        &self,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-leaderboard/index",
        );
        self.fetch("classic::pvp_leaderboards_index", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn pvp_leaderboard(
        &self,
        pvp_region_id: u64,
        pvp_season_id: u64,
        bracket: &str,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-leaderboard/{bracket}",
        );
        self.fetch("classic::pvp_leaderboard", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn pvp_rewards_index(
        &self,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-reward/index",
        );
        self.fetch("classic::pvp_rewards_index", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    // Realms and regions

    pub async fn realms_index(&self) -> Result<Option<Value>> {
        self.fetch("classic::realms_index", &Namespace::DYNAMIC_CLASSIC, "/data/wow/realm/index")
            .await
    }

    pub async fn realm(&self, realm_slug: &str) -> Result<Option<Value>> {
        let path = format!("/data/wow/realm/{}", slug(realm_slug));
        self.fetch("classic::realm", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    pub async fn search_realms(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "classic::search_realms",
            &Namespace::DYNAMIC_CLASSIC,
            "/data/wow/search/realm",
            params,
        )
        .await
    }

    pub async fn regions_index(&self) -> Result<Option<Value>> {
        self.fetch("classic::regions_index", &Namespace::DYNAMIC_CLASSIC, "/data/wow/region/index")
            .await
    }

    pub async fn region(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/region/{id}");
        self.fetch("classic::region", &Namespace::DYNAMIC_CLASSIC, &path).await
    }

    // WoW token

    /// Only served in the CN region; elsewhere the API answers 404.
    pub async fn token_index(&self) -> Result<Option<Value>> {
        self.fetch("classic::token_index", &Namespace::DYNAMIC_CLASSIC, "/data/wow/token/index")
            .await
    }
}
