//! Retail game data (`static-{region}` and `dynamic-{region}` namespaces)
//!
//! Search accessors take raw query parameters, passed through unchanged
//! next to `namespace` and `locale`.

use std::sync::Arc;

use serde_json::Value;
use wowapi_domain::{Namespace, Result};
use wowapi_infra::ApiClient;

use crate::utils::{slug, timed_fetch};

/// Retail game data accessors.
#[derive(Clone)]
pub struct RetailGameData {
    client: Arc<ApiClient>,
}

impl RetailGameData {
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

    // Achievements

    pub async fn achievement_categories_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::achievement_categories_index",
            &Namespace::STATIC,
            "/data/wow/achievement-category/index",
        )
        .await
    }

    pub async fn achievement_category(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/achievement-category/{id}");
        self.fetch("retail::achievement_category", &Namespace::STATIC, &path).await
    }

    pub async fn achievements_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::achievements_index", &Namespace::STATIC, "/data/wow/achievement/index")
            .await
    }

    pub async fn achievement(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/achievement/{id}");
        self.fetch("retail::achievement", &Namespace::STATIC, &path).await
    }

    pub async fn achievement_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/achievement/{id}");
        self.fetch("retail::achievement_media", &Namespace::STATIC, &path).await
    }

    // Auction house

    /// Current auctions on a connected realm. Commodities are listed
    /// separately by [`commodities`](Self::commodities).
    pub async fn auctions(&self, connected_realm_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/connected-realm/{connected_realm_id}/auctions");
        self.fetch("retail::auctions", &Namespace::DYNAMIC, &path).await
    }

    /// Region-wide commodity auctions.
    pub async fn commodities(&self) -> Result<Option<Value>> {
        self.fetch("retail::commodities", &Namespace::DYNAMIC, "/data/wow/auctions/commodities")
            .await
    }

    // Azerite essences

    pub async fn azerite_essences_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::azerite_essences_index",
            &Namespace::STATIC,
            "/data/wow/azerite-essence/index",
        )
        .await
    }

    pub async fn azerite_essence(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/azerite-essence/{id}");
        self.fetch("retail::azerite_essence", &Namespace::STATIC, &path).await
    }

    pub async fn search_azerite_essences(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "retail::search_azerite_essences",
            &Namespace::STATIC,
            "/data/wow/search/azerite-essence",
            params,
        )
        .await
    }

    pub async fn azerite_essence_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/azerite-essence/{id}");
        self.fetch("retail::azerite_essence_media", &Namespace::STATIC, &path).await
    }

    // Connected realms

    pub async fn connected_realms_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::connected_realms_index",
            &Namespace::DYNAMIC,
            "/data/wow/connected-realm/index",
        )
        .await
    }

    pub async fn connected_realm(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/connected-realm/{id}");
        self.fetch("retail::connected_realm", &Namespace::DYNAMIC, &path).await
    }

    pub async fn search_connected_realms(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "retail::search_connected_realms",
            &Namespace::DYNAMIC,
            "/data/wow/search/connected-realm",
            params,
        )
        .await
    }

    // Covenants

    pub async fn covenants_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::covenants_index", &Namespace::STATIC, "/data/wow/covenant/index").await
    }

    pub async fn covenant(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/covenant/{id}");
        self.fetch("retail::covenant", &Namespace::STATIC, &path).await
    }

    pub async fn covenant_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/covenant/{id}");
        self.fetch("retail::covenant_media", &Namespace::STATIC, &path).await
    }

    pub async fn soulbinds_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::soulbinds_index",
            &Namespace::STATIC,
            "/data/wow/covenant/soulbind/index",
        )
        .await
    }

    pub async fn soulbind(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/covenant/soulbind/{id}");
        self.fetch("retail::soulbind", &Namespace::STATIC, &path).await
    }

    pub async fn conduits_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::conduits_index", &Namespace::STATIC, "/data/wow/covenant/conduit/index")
            .await
    }

    pub async fn conduit(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/covenant/conduit/{id}");
        self.fetch("retail::conduit", &Namespace::STATIC, &path).await
    }

    // Creatures

    pub async fn creature_families_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::creature_families_index",
            &Namespace::STATIC,
            "/data/wow/creature-family/index",
        )
        .await
    }

    pub async fn creature_family(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature-family/{id}");
        self.fetch("retail::creature_family", &Namespace::STATIC, &path).await
    }

    pub async fn creature_types_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::creature_types_index",
            &Namespace::STATIC,
            "/data/wow/creature-type/index",
        )
        .await
    }

    pub async fn creature_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature-type/{id}");
        self.fetch("retail::creature_type", &Namespace::STATIC, &path).await
    }

    pub async fn creature(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/creature/{id}");
        self.fetch("retail::creature", &Namespace::STATIC, &path).await
    }

    pub async fn search_creatures(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search(
            "retail::search_creatures",
            &Namespace::STATIC,
            "/data/wow/search/creature",
            params,
        )
        .await
    }

    pub async fn creature_display_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/creature-display/{id}");
        self.fetch("retail::creature_display_media", &Namespace::STATIC, &path).await
    }

    pub async fn creature_family_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/creature-family/{id}");
        self.fetch("retail::creature_family_media", &Namespace::STATIC, &path).await
    }

    // Guild crest

    pub async fn guild_crest_components_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::guild_crest_components_index",
            &Namespace::STATIC,
            "/data/wow/guild-crest/index",
        )
        .await
    }

    pub async fn guild_crest_border_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/guild-crest/border/{id}");
        self.fetch("retail::guild_crest_border_media", &Namespace::STATIC, &path).await
    }

    pub async fn guild_crest_emblem_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/guild-crest/emblem/{id}");
        self.fetch("retail::guild_crest_emblem_media", &Namespace::STATIC, &path).await
    }

    // Items

    pub async fn item_classes_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::item_classes_index", &Namespace::STATIC, "/data/wow/item-class/index")
            .await
    }

    pub async fn item_class(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/item-class/{id}");
        self.fetch("retail::item_class", &Namespace::STATIC, &path).await
    }

    pub async fn item_sets_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::item_sets_index", &Namespace::STATIC, "/data/wow/item-set/index").await
    }

    pub async fn item_set(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/item-set/{id}");
        self.fetch("retail::item_set", &Namespace::STATIC, &path).await
    }

    pub async fn item_subclass(
        &self,
        item_class_id: u64,
        item_subclass_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/item-class/{item_class_id}/item-subclass/{item_subclass_id}");
        self.fetch("retail::item_subclass", &Namespace::STATIC, &path).await
    }

    pub async fn item(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/item/{id}");
        self.fetch("retail::item", &Namespace::STATIC, &path).await
    }

    pub async fn item_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/item/{id}");
        self.fetch("retail::item_media", &Namespace::STATIC, &path).await
    }

    pub async fn search_items(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search("retail::search_items", &Namespace::STATIC, "/data/wow/search/item", params)
            .await
    }

    // Journal

    pub async fn journal_expansions_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::journal_expansions_index",
            &Namespace::STATIC,
            "/data/wow/journal-expansion/index",
        )
        .await
    }

    pub async fn journal_expansion(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/journal-expansion/{id}");
        self.fetch("retail::journal_expansion", &Namespace::STATIC, &path).await
    }

    pub async fn journal_encounters_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::journal_encounters_index",
            &Namespace::STATIC,
            "/data/wow/journal-encounter/index",
        )
        .await
    }

    pub async fn journal_encounter(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/journal-encounter/{id}");
        self.fetch("retail::journal_encounter", &Namespace::STATIC, &path).await
    }

    pub async fn search_journal_encounters(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        self.search(
            "retail::search_journal_encounters",
            &Namespace::STATIC,
            "/data/wow/search/journal-encounter",
            params,
        )
        .await
    }

    pub async fn journal_instances_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::journal_instances_index",
            &Namespace::STATIC,
            "/data/wow/journal-instance/index",
        )
        .await
    }

    pub async fn journal_instance(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/journal-instance/{id}");
        self.fetch("retail::journal_instance", &Namespace::STATIC, &path).await
    }

    pub async fn journal_instance_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/journal-instance/{id}");
        self.fetch("retail::journal_instance_media", &Namespace::STATIC, &path).await
    }

    // Media

    /// Search across media documents, e.g. `[("tags", "item")]`.
    pub async fn search_media(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search("retail::search_media", &Namespace::STATIC, "/data/wow/search/media", params)
            .await
    }

    // Modified crafting

    pub async fn modified_crafting_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::modified_crafting_index",
            &Namespace::STATIC,
            "/data/wow/modified-crafting/index",
        )
        .await
    }

    pub async fn modified_crafting_categories_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::modified_crafting_categories_index",
            &Namespace::STATIC,
            "/data/wow/modified-crafting/category/index",
        )
        .await
    }

    pub async fn modified_crafting_category(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/modified-crafting/category/{id}");
        self.fetch("retail::modified_crafting_category", &Namespace::STATIC, &path).await
    }

    pub async fn modified_crafting_reagent_slot_types_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::modified_crafting_reagent_slot_types_index",
            &Namespace::STATIC,
            "/data/wow/modified-crafting/reagent-slot-type/index",
        )
        .await
    }

    pub async fn modified_crafting_reagent_slot_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/modified-crafting/reagent-slot-type/{id}");
        self.fetch("retail::modified_crafting_reagent_slot_type", &Namespace::STATIC, &path).await
    }

    // Mounts

    pub async fn mounts_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::mounts_index", &Namespace::STATIC, "/data/wow/mount/index").await
    }

    pub async fn mount(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/mount/{id}");
        self.fetch("retail::mount", &Namespace::STATIC, &path).await
    }

    pub async fn search_mounts(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search("retail::search_mounts", &Namespace::STATIC, "/data/wow/search/mount", params)
            .await
    }

    // Mythic keystone affixes

    pub async fn keystone_affixes_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::keystone_affixes_index",
            &Namespace::STATIC,
            "/data/wow/keystone-affix/index",
        )
        .await
    }

    pub async fn keystone_affix(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/keystone-affix/{id}");
        self.fetch("retail::keystone_affix", &Namespace::STATIC, &path).await
    }

    pub async fn keystone_affix_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/keystone-affix/{id}");
        self.fetch("retail::keystone_affix_media", &Namespace::STATIC, &path).await
    }

    // Mythic keystone dungeons

    pub async fn mythic_keystone_dungeons_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::mythic_keystone_dungeons_index",
            &Namespace::DYNAMIC,
            "/data/wow/mythic-keystone/dungeon/index",
        )
        .await
    }

    pub async fn mythic_keystone_dungeon(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/mythic-keystone/dungeon/{id}");
        self.fetch("retail::mythic_keystone_dungeon", &Namespace::DYNAMIC, &path).await
    }

    pub async fn mythic_keystone_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::mythic_keystone_index",
            &Namespace::DYNAMIC,
            "/data/wow/mythic-keystone/index",
        )
        .await
    }

    pub async fn mythic_keystone_periods_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::mythic_keystone_periods_index",
            &Namespace::DYNAMIC,
            "/data/wow/mythic-keystone/period/index",
        )
        .await
    }

    pub async fn mythic_keystone_period(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/mythic-keystone/period/{id}");
        self.fetch("retail::mythic_keystone_period", &Namespace::DYNAMIC, &path).await
    }

    pub async fn mythic_keystone_seasons_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::mythic_keystone_seasons_index",
            &Namespace::DYNAMIC,
            "/data/wow/mythic-keystone/season/index",
        )
        .await
    }

    pub async fn mythic_keystone_season(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/mythic-keystone/season/{id}");
        self.fetch("retail::mythic_keystone_season", &Namespace::DYNAMIC, &path).await
    }

    // Mythic keystone leaderboards

    pub async fn mythic_keystone_leaderboards_index(
        &self,
        connected_realm_id: u64,
    ) -> Result<Option<Value>> {
        let path =
            format!("/data/wow/connected-realm/{connected_realm_id}/mythic-leaderboard/index");
        self.fetch("retail::mythic_keystone_leaderboards_index", &Namespace::DYNAMIC, &path).await
    }

    /// Weekly leaderboard for one dungeon on one connected realm.
    pub async fn mythic_keystone_leaderboard(
        &self,
        connected_realm_id: u64,
        dungeon_id: u64,
        period_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/data/wow/connected-realm/{connected_realm_id}/mythic-leaderboard/{dungeon_id}/period/{period_id}",
        );
        self.fetch("retail::mythic_keystone_leaderboard", &Namespace::DYNAMIC, &path).await
    }

    // Mythic raid leaderboard

    /// Hall of fame for a raid, e.g. `("uldir", "alliance")`.
    pub async fn mythic_raid_leaderboard(
        &self,
        raid: &str,
        faction: &str,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/leaderboard/hall-of-fame/{raid}/{faction}");
        self.fetch("retail::mythic_raid_leaderboard", &Namespace::DYNAMIC, &path).await
    }

    // Pets

    pub async fn pets_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::pets_index", &Namespace::STATIC, "/data/wow/pet/index").await
    }

    pub async fn pet(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pet/{id}");
        self.fetch("retail::pet", &Namespace::STATIC, &path).await
    }

    pub async fn pet_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/pet/{id}");
        self.fetch("retail::pet_media", &Namespace::STATIC, &path).await
    }

    pub async fn pet_abilities_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::pet_abilities_index", &Namespace::STATIC, "/data/wow/pet-ability/index")
            .await
    }

    pub async fn pet_ability(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pet-ability/{id}");
        self.fetch("retail::pet_ability", &Namespace::STATIC, &path).await
    }

    pub async fn pet_ability_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/pet-ability/{id}");
        self.fetch("retail::pet_ability_media", &Namespace::STATIC, &path).await
    }

    // Playable classes

    pub async fn playable_classes_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::playable_classes_index",
            &Namespace::STATIC,
            "/data/wow/playable-class/index",
        )
        .await
    }

    pub async fn playable_class(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-class/{id}");
        self.fetch("retail::playable_class", &Namespace::STATIC, &path).await
    }

    pub async fn playable_class_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/playable-class/{id}");
        self.fetch("retail::playable_class_media", &Namespace::STATIC, &path).await
    }

    pub async fn pvp_talent_slots(&self, playable_class_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-class/{playable_class_id}/pvp-talent-slots");
        self.fetch("retail::pvp_talent_slots", &Namespace::STATIC, &path).await
    }

    // Playable races

    pub async fn playable_races_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::playable_races_index",
            &Namespace::STATIC,
            "/data/wow/playable-race/index",
        )
        .await
    }

    pub async fn playable_race(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-race/{id}");
        self.fetch("retail::playable_race", &Namespace::STATIC, &path).await
    }

    // Playable specializations

    pub async fn playable_specializations_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::playable_specializations_index",
            &Namespace::STATIC,
            "/data/wow/playable-specialization/index",
        )
        .await
    }

    pub async fn playable_specialization(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/playable-specialization/{id}");
        self.fetch("retail::playable_specialization", &Namespace::STATIC, &path).await
    }

    pub async fn playable_specialization_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/playable-specialization/{id}");
        self.fetch("retail::playable_specialization_media", &Namespace::STATIC, &path).await
    }

    // Power types

    pub async fn power_types_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::power_types_index", &Namespace::STATIC, "/data/wow/power-type/index")
            .await
    }

    pub async fn power_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/power-type/{id}");
        self.fetch("retail::power_type", &Namespace::STATIC, &path).await
    }

    // Professions

    pub async fn professions_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::professions_index", &Namespace::STATIC, "/data/wow/profession/index")
            .await
    }

    pub async fn profession(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/profession/{id}");
        self.fetch("retail::profession", &Namespace::STATIC, &path).await
    }

    pub async fn profession_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/profession/{id}");
        self.fetch("retail::profession_media", &Namespace::STATIC, &path).await
    }

    pub async fn profession_skill_tier(
        &self,
        profession_id: u64,
        skill_tier_id: u64,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/profession/{profession_id}/skill-tier/{skill_tier_id}");
        self.fetch("retail::profession_skill_tier", &Namespace::STATIC, &path).await
    }

    pub async fn recipe(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/recipe/{id}");
        self.fetch("retail::recipe", &Namespace::STATIC, &path).await
    }

    pub async fn recipe_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/recipe/{id}");
        self.fetch("retail::recipe_media", &Namespace::STATIC, &path).await
    }

    // PvP seasons

    pub async fn pvp_seasons_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::pvp_seasons_index", &Namespace::DYNAMIC, "/data/wow/pvp-season/index")
            .await
    }

    pub async fn pvp_season(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-season/{id}");
        self.fetch("retail::pvp_season", &Namespace::DYNAMIC, &path).await
    }

    pub async fn pvp_leaderboards_index(&self, pvp_season_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/index");
        self.fetch("retail::pvp_leaderboards_index", &Namespace::DYNAMIC, &path).await
    }

    /// `bracket` is a bracket name such as `"3v3"` or `"rbg"`.
    pub async fn pvp_leaderboard(
        &self,
        pvp_season_id: u64,
        bracket: &str,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/{bracket}");
        self.fetch("retail::pvp_leaderboard", &Namespace::DYNAMIC, &path).await
    }

    pub async fn pvp_rewards_index(&self, pvp_season_id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-season/{pvp_season_id}/pvp-reward/index");
        self.fetch("retail::pvp_rewards_index", &Namespace::DYNAMIC, &path).await
    }

    // PvP tiers

    pub async fn pvp_tiers_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::pvp_tiers_index", &Namespace::STATIC, "/data/wow/pvp-tier/index").await
    }

    pub async fn pvp_tier(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-tier/{id}");
        self.fetch("retail::pvp_tier", &Namespace::STATIC, &path).await
    }

    pub async fn pvp_tier_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/pvp-tier/{id}");
        self.fetch("retail::pvp_tier_media", &Namespace::STATIC, &path).await
    }

    // Quests

    pub async fn quests_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::quests_index", &Namespace::STATIC, "/data/wow/quest/index").await
    }

    pub async fn quest(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/quest/{id}");
        self.fetch("retail::quest", &Namespace::STATIC, &path).await
    }

    pub async fn quest_categories_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::quest_categories_index",
            &Namespace::STATIC,
            "/data/wow/quest/category/index",
        )
        .await
    }

    pub async fn quest_category(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/quest/category/{id}");
        self.fetch("retail::quest_category", &Namespace::STATIC, &path).await
    }

    pub async fn quest_areas_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::quest_areas_index", &Namespace::STATIC, "/data/wow/quest/area/index")
            .await
    }

    pub async fn quest_area(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/quest/area/{id}");
        self.fetch("retail::quest_area", &Namespace::STATIC, &path).await
    }

    pub async fn quest_types_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::quest_types_index", &Namespace::STATIC, "/data/wow/quest/type/index")
            .await
    }

    pub async fn quest_type(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/quest/type/{id}");
        self.fetch("retail::quest_type", &Namespace::STATIC, &path).await
    }

    // Realms and regions

    pub async fn realms_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::realms_index", &Namespace::DYNAMIC, "/data/wow/realm/index").await
    }

    pub async fn realm(&self, realm_slug: &str) -> Result<Option<Value>> {
        let path = format!("/data/wow/realm/{}", slug(realm_slug));
        self.fetch("retail::realm", &Namespace::DYNAMIC, &path).await
    }

    /// Realm search. `params` are passed through as query parameters, e.g.
    /// `[("status.type", "UP"), ("orderby", "id")]`.
    pub async fn search_realms(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search("retail::search_realms", &Namespace::DYNAMIC, "/data/wow/search/realm", params)
            .await
    }

    pub async fn regions_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::regions_index", &Namespace::DYNAMIC, "/data/wow/region/index").await
    }

    pub async fn region(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/region/{id}");
        self.fetch("retail::region", &Namespace::DYNAMIC, &path).await
    }

    // Reputations

    pub async fn reputation_factions_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::reputation_factions_index",
            &Namespace::STATIC,
            "/data/wow/reputation-faction/index",
        )
        .await
    }

    pub async fn reputation_faction(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/reputation-faction/{id}");
        self.fetch("retail::reputation_faction", &Namespace::STATIC, &path).await
    }

    pub async fn reputation_tiers_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::reputation_tiers_index",
            &Namespace::STATIC,
            "/data/wow/reputation-tiers/index",
        )
        .await
    }

    pub async fn reputation_tiers(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/reputation-tiers/{id}");
        self.fetch("retail::reputation_tiers", &Namespace::STATIC, &path).await
    }

    // Spells

    pub async fn spell(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/spell/{id}");
        self.fetch("retail::spell", &Namespace::STATIC, &path).await
    }

    pub async fn spell_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/spell/{id}");
        self.fetch("retail::spell_media", &Namespace::STATIC, &path).await
    }

    pub async fn search_spells(&self, params: &[(&str, &str)]) -> Result<Option<Value>> {
        self.search("retail::search_spells", &Namespace::STATIC, "/data/wow/search/spell", params)
            .await
    }

    // Talents

    pub async fn talents_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::talents_index", &Namespace::STATIC, "/data/wow/talent/index").await
    }

    pub async fn talent(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/talent/{id}");
        self.fetch("retail::talent", &Namespace::STATIC, &path).await
    }

    pub async fn pvp_talents_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::pvp_talents_index", &Namespace::STATIC, "/data/wow/pvp-talent/index")
            .await
    }

    pub async fn pvp_talent(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/pvp-talent/{id}");
        self.fetch("retail::pvp_talent", &Namespace::STATIC, &path).await
    }

    // Tech talents

    pub async fn tech_talent_trees_index(&self) -> Result<Option<Value>> {
        self.fetch(
            "retail::tech_talent_trees_index",
            &Namespace::STATIC,
            "/data/wow/tech-talent-tree/index",
        )
        .await
    }

    pub async fn tech_talent_tree(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/tech-talent-tree/{id}");
        self.fetch("retail::tech_talent_tree", &Namespace::STATIC, &path).await
    }

    pub async fn tech_talents_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::tech_talents_index", &Namespace::STATIC, "/data/wow/tech-talent/index")
            .await
    }

    pub async fn tech_talent(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/tech-talent/{id}");
        self.fetch("retail::tech_talent", &Namespace::STATIC, &path).await
    }

    pub async fn tech_talent_media(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/media/tech-talent/{id}");
        self.fetch("retail::tech_talent_media", &Namespace::STATIC, &path).await
    }

    // Titles

    pub async fn titles_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::titles_index", &Namespace::STATIC, "/data/wow/title/index").await
    }

    pub async fn title(&self, id: u64) -> Result<Option<Value>> {
        let path = format!("/data/wow/title/{id}");
        self.fetch("retail::title", &Namespace::STATIC, &path).await
    }

    // WoW token

    /// Current WoW token price, in copper.
    pub async fn token_index(&self) -> Result<Option<Value>> {
        self.fetch("retail::token_index", &Namespace::DYNAMIC, "/data/wow/token/index").await
    }
}
