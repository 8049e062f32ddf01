//! Retail character and guild profiles (`profile-{region}` namespace)
//!
//! Realm slugs, character names and guild slugs are lower-cased before they
//! are put in the path; the API rejects mixed case.

use std::sync::Arc;

use serde_json::Value;
use wowapi_domain::{Namespace, Result};
use wowapi_infra::ApiClient;

use crate::utils::{slug, timed_fetch};

/// Retail profile accessors.
#[derive(Clone)]
pub struct RetailProfile {
    client: Arc<ApiClient>,
}

impl RetailProfile {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn character(
        &self,
        endpoint: &str,
        realm_slug: &str,
        character_name: &str,
        suffix: &str,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/profile/wow/character/{}/{}{suffix}",
            slug(realm_slug),
            slug(character_name)
        );
        timed_fetch(&self.client, endpoint, &Namespace::PROFILE, &path, &[]).await
    }

    async fn guild(
        &self,
        endpoint: &str,
        realm_slug: &str,
        name_slug: &str,
        suffix: &str,
    ) -> Result<Option<Value>> {
        let path = format!("/data/wow/guild/{}/{}{suffix}", slug(realm_slug), slug(name_slug));
        timed_fetch(&self.client, endpoint, &Namespace::PROFILE, &path, &[]).await
    }

    // Character

    pub async fn character_profile_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_profile_summary", realm_slug, character_name, "").await
    }

    /// Returns `{"status": ..}`-style data; a 404 means the character was
    /// deleted or transferred.
    pub async fn character_profile_status(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_profile_status", realm_slug, character_name, "/status")
            .await
    }

    // Achievements

    pub async fn character_achievements_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_achievements_summary",
            realm_slug,
            character_name,
            "/achievements",
        )
        .await
    }

    pub async fn character_achievement_statistics(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_achievement_statistics",
            realm_slug,
            character_name,
            "/achievements/statistics",
        )
        .await
    }

    // Appearance and collections

    pub async fn character_appearance_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_appearance_summary",
            realm_slug,
            character_name,
            "/appearance",
        )
        .await
    }

    pub async fn character_collections_index(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_collections_index",
            realm_slug,
            character_name,
            "/collections",
        )
        .await
    }

    pub async fn character_mounts_collection_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_mounts_collection_summary",
            realm_slug,
            character_name,
            "/collections/mounts",
        )
        .await
    }

    pub async fn character_pets_collection_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_pets_collection_summary",
            realm_slug,
            character_name,
            "/collections/pets",
        )
        .await
    }

    // Encounters

    pub async fn character_encounters_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_encounters_summary",
            realm_slug,
            character_name,
            "/encounters",
        )
        .await
    }

    pub async fn character_dungeons(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_dungeons",
            realm_slug,
            character_name,
            "/encounters/dungeons",
        )
        .await
    }

    pub async fn character_raids(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_raids", realm_slug, character_name, "/encounters/raids")
            .await
    }

    // Equipment and media

    pub async fn character_equipment_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_equipment_summary",
            realm_slug,
            character_name,
            "/equipment",
        )
        .await
    }

    /// Hunters only; other classes get a 404.
    pub async fn character_hunter_pets_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_hunter_pets_summary",
            realm_slug,
            character_name,
            "/hunter-pets",
        )
        .await
    }

    pub async fn character_media_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_media_summary",
            realm_slug,
            character_name,
            "/character-media",
        )
        .await
    }

    // Mythic keystone

    pub async fn character_mythic_keystone_profile(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_mythic_keystone_profile",
            realm_slug,
            character_name,
            "/mythic-keystone-profile",
        )
        .await
    }

    pub async fn character_mythic_keystone_season(
        &self,
        realm_slug: &str,
        character_name: &str,
        season_id: u64,
    ) -> Result<Option<Value>> {
        let suffix = format!("/mythic-keystone-profile/season/{season_id}");
        self.character(
            "retail::character_mythic_keystone_season",
            realm_slug,
            character_name,
            &suffix,
        )
        .await
    }

    // Professions

    pub async fn character_professions_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_professions_summary",
            realm_slug,
            character_name,
            "/professions",
        )
        .await
    }

    // PvP

    /// `bracket` is a bracket name such as `"2v2"`, `"3v3"` or `"rbg"`.
    pub async fn character_pvp_bracket_statistics(
        &self,
        realm_slug: &str,
        character_name: &str,
        bracket: &str,
    ) -> Result<Option<Value>> {
        let suffix = format!("/pvp-bracket/{bracket}");
        self.character(
            "retail::character_pvp_bracket_statistics",
            realm_slug,
            character_name,
            &suffix,
        )
        .await
    }

    pub async fn character_pvp_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_pvp_summary", realm_slug, character_name, "/pvp-summary")
            .await
    }

    // Quests

    pub async fn character_quests(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_quests", realm_slug, character_name, "/quests").await
    }

    pub async fn character_completed_quests(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_completed_quests",
            realm_slug,
            character_name,
            "/quests/completed",
        )
        .await
    }

    // Reputations, soulbinds and specializations

    pub async fn character_reputations_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_reputations_summary",
            realm_slug,
            character_name,
            "/reputations",
        )
        .await
    }

    pub async fn character_soulbinds(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_soulbinds", realm_slug, character_name, "/soulbinds")
            .await
    }

    pub async fn character_specializations_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_specializations_summary",
            realm_slug,
            character_name,
            "/specializations",
        )
        .await
    }

    // Statistics and titles

    pub async fn character_statistics_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character(
            "retail::character_statistics_summary",
            realm_slug,
            character_name,
            "/statistics",
        )
        .await
    }

    pub async fn character_titles_summary(
        &self,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Option<Value>> {
        self.character("retail::character_titles_summary", realm_slug, character_name, "/titles")
            .await
    }

    // Guild

    pub async fn guild_summary(&self, realm_slug: &str, name_slug: &str) -> Result<Option<Value>> {
        self.guild("retail::guild_summary", realm_slug, name_slug, "").await
    }

    pub async fn guild_activity(&self, realm_slug: &str, name_slug: &str) -> Result<Option<Value>> {
        self.guild("retail::guild_activity", realm_slug, name_slug, "/activity").await
    }

    pub async fn guild_achievements(
        &self,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Option<Value>> {
        self.guild("retail::guild_achievements", realm_slug, name_slug, "/achievements").await
    }

    pub async fn guild_roster(&self, realm_slug: &str, name_slug: &str) -> Result<Option<Value>> {
        self.guild("retail::guild_roster", realm_slug, name_slug, "/roster").await
    }
}
