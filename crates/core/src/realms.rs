//! Realm lookup from free-form user input
//!
//! Built from the body of the realm index endpoint
//! (`{"realms": [{"id": 57, "name": "Illidan", "slug": "illidan"}, ...]}`).
//! A query matches a realm when, ignoring case, it is contained in the name,
//! in the name with spaces removed, or in the slug, or when it equals the id.
//! The first match in index order wins.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RealmEntry {
    name: String,
    compact_name: String,
    slug: String,
    id: String,
}

impl RealmEntry {
    fn from_json(realm: &Value) -> Option<Self> {
        let slug = realm.get("slug")?.as_str()?.to_string();
        let name = display_name(realm.get("name")?)?.to_lowercase();
        let id = match realm.get("id")? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => return None,
        };
        let compact_name = name.replace(' ', "");

        Some(Self { name, compact_name, slug, id })
    }

    fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
            || self.compact_name.contains(query)
            || self.slug.to_lowercase().contains(query)
            || self.id == query
    }
}

/// Names are plain strings when the index was fetched with a locale and
/// locale maps otherwise; for a map any translation is used.
fn display_name(name: &Value) -> Option<&str> {
    match name {
        Value::String(s) => Some(s),
        Value::Object(translations) => translations.values().find_map(Value::as_str),
        _ => None,
    }
}

/// Searchable snapshot of a realm index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealmIndex {
    realms: Vec<RealmEntry>,
}

impl RealmIndex {
    /// Parse a realm index body. Entries missing a name, slug or id are
    /// skipped. Returns `None` when the body has no `realms` array.
    pub fn from_index(body: &Value) -> Option<Self> {
        let realms = body.get("realms")?.as_array()?;
        Some(Self { realms: realms.iter().filter_map(RealmEntry::from_json).collect() })
    }

    pub fn len(&self) -> usize {
        self.realms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }

    /// Slug of the first realm matching `query`.
    pub fn find_slug(&self, query: &str) -> Option<&str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.realms.iter().find(|realm| realm.matches(&query)).map(|realm| realm.slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn index() -> RealmIndex {
        RealmIndex::from_index(&json!({
            "_links": {"self": {"href": "https://us.api.blizzard.com/data/wow/realm/"}},
            "realms": [
                {"id": 57, "name": "Illidan", "slug": "illidan"},
                {"id": 1146, "name": "Twisting Nether", "slug": "twisting-nether"},
                {"id": 3678, "name": "Thrall", "slug": "thrall"},
                {"name": "Broken", "slug": "broken"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn skips_incomplete_entries() {
        assert_eq!(index().len(), 3);
    }

    #[test]
    fn matches_by_name_ignoring_case() {
        assert_eq!(index().find_slug("ILLIDAN"), Some("illidan"));
        assert_eq!(index().find_slug("Twisting Nether"), Some("twisting-nether"));
    }

    #[test]
    fn matches_name_without_spaces() {
        assert_eq!(index().find_slug("twistingnether"), Some("twisting-nether"));
    }

    #[test]
    fn matches_slug_substring() {
        assert_eq!(index().find_slug("nether"), Some("twisting-nether"));
        assert_eq!(index().find_slug("ting-neth"), Some("twisting-nether"));
    }

    #[test]
    fn id_must_match_exactly() {
        assert_eq!(index().find_slug("3678"), Some("thrall"));
        assert_eq!(index().find_slug("367"), None);
    }

    #[test]
    fn no_match_or_blank_query_is_none() {
        assert_eq!(index().find_slug("area 52"), None);
        assert_eq!(index().find_slug("   "), None);
    }

    #[test]
    fn localized_name_maps_are_accepted() {
        let index = RealmIndex::from_index(&json!({
            "realms": [{"id": 1, "name": {"en_US": "Area 52"}, "slug": "area-52"}]
        }))
        .unwrap();
        assert_eq!(index.find_slug("area52"), Some("area-52"));
    }

    #[test]
    fn body_without_realms_is_rejected() {
        assert_eq!(RealmIndex::from_index(&json!({"code": 404})), None);
        assert_eq!(RealmIndex::from_index(&Value::Null), None);
    }
}
