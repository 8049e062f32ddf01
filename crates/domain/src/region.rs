//! Region directory
//!
//! Every API region has its own OAuth host, game data host and set of
//! supported locales. The first locale listed for a region is its default.

use std::str::FromStr;

use crate::errors::{Result, WowApiError};
use crate::impl_domain_name_conversions;

/// A Battle.net API region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
}

impl_domain_name_conversions!(Region {
    Us => "US",
    Eu => "EU",
    Kr => "KR",
    Tw => "TW",
    Cn => "CN",
});

/// Base URLs for one region. Request URLs are `{base}{endpoint path}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHosts {
    pub oauth: &'static str,
    pub game: &'static str,
}

impl RegionHosts {
    pub fn oauth_url(&self, path: &str) -> String {
        format!("{}{}", self.oauth, path)
    }

    pub fn game_url(&self, path: &str) -> String {
        format!("{}{}", self.game, path)
    }
}

impl Region {
    /// Resolve a region identifier, ignoring case.
    ///
    /// # Errors
    /// [`WowApiError::InvalidRegion`] listing the valid identifiers.
    pub fn resolve(input: &str) -> Result<Self> {
        Self::from_name(input).ok_or_else(|| WowApiError::InvalidRegion {
            region: input.to_string(),
            supported: Self::names(),
        })
    }

    /// Canonical uppercase identifier (`"US"`).
    pub const fn name(self) -> &'static str {
        self.as_str()
    }

    /// Lowercase identifier used inside namespaces (`"us"`).
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    pub const fn hosts(self) -> RegionHosts {
        match self {
            Self::Us => RegionHosts {
                oauth: "https://us.battle.net",
                game: "https://us.api.blizzard.com",
            },
            Self::Eu => RegionHosts {
                oauth: "https://eu.battle.net",
                game: "https://eu.api.blizzard.com",
            },
            Self::Kr => RegionHosts {
                oauth: "https://kr.battle.net",
                game: "https://kr.api.blizzard.com",
            },
            Self::Tw => RegionHosts {
                oauth: "https://tw.battle.net",
                game: "https://tw.api.blizzard.com",
            },
            Self::Cn => RegionHosts {
                oauth: "https://www.battlenet.com.cn",
                game: "https://gateway.battlenet.com.cn",
            },
        }
    }

    /// Supported locales; the first entry is the default.
    pub const fn locales(self) -> &'static [&'static str] {
        match self {
            Self::Us => &["en_US", "es_MX", "pt_BR"],
            Self::Eu => &["en_GB", "es_ES", "fr_FR", "ru_RU", "de_DE", "pt_PT", "it_IT"],
            Self::Kr => &["ko_KR"],
            Self::Tw => &["zh_TW"],
            Self::Cn => &["zh_CN"],
        }
    }

    pub const fn default_locale(self) -> &'static str {
        self.locales()[0]
    }

    /// Exact, case-sensitive membership test.
    pub fn supports_locale(self, candidate: &str) -> bool {
        self.locales().contains(&candidate)
    }

    /// Return the canonical locale string if this region supports it.
    ///
    /// # Errors
    /// [`WowApiError::InvalidLocale`] listing this region's locales.
    pub fn validate_locale(self, candidate: &str) -> Result<&'static str> {
        self.locales().iter().copied().find(|l| *l == candidate).ok_or_else(|| {
            WowApiError::InvalidLocale {
                locale: candidate.to_string(),
                region: self.name().to_string(),
                supported: self.locales().to_vec(),
            }
        })
    }
}

impl FromStr for Region {
    type Err = WowApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

/// Anything that names a region: a [`Region`] or its identifier.
pub trait IntoRegion {
    /// # Errors
    /// [`WowApiError::InvalidRegion`] when the identifier is unknown.
    fn into_region(self) -> Result<Region>;
}

impl IntoRegion for Region {
    fn into_region(self) -> Result<Region> {
        Ok(self)
    }
}

impl IntoRegion for &str {
    fn into_region(self) -> Result<Region> {
        Region::resolve(self)
    }
}

impl IntoRegion for String {
    fn into_region(self) -> Result<Region> {
        Region::resolve(&self)
    }
}

impl IntoRegion for &String {
    fn into_region(self) -> Result<Region> {
        Region::resolve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive_for_every_region() {
        for region in Region::ALL {
            let upper = region.name();
            let lower = upper.to_lowercase();
            let mixed: String = upper
                .chars()
                .enumerate()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect();

            assert_eq!(Region::resolve(upper).unwrap(), *region);
            assert_eq!(Region::resolve(&lower).unwrap(), Region::resolve(upper).unwrap());
            assert_eq!(Region::resolve(&mixed).unwrap(), *region);
        }
    }

    #[test]
    fn resolve_rejects_unknown_regions_and_lists_valid_ones() {
        for bad in ["", "usa", "sea", "u s", " us", "us ", "\teu\n"] {
            match Region::resolve(bad) {
                Err(WowApiError::InvalidRegion { region, supported }) => {
                    assert_eq!(region, bad);
                    assert_eq!(supported, vec!["US", "EU", "KR", "TW", "CN"]);
                }
                other => panic!("expected InvalidRegion for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn concrete_region_passes_through_unchanged() {
        assert_eq!(Region::Kr.into_region().unwrap(), Region::Kr);
        assert_eq!("tw".into_region().unwrap(), Region::Tw);
        assert_eq!(String::from("Cn").into_region().unwrap(), Region::Cn);
    }

    #[test]
    fn default_locale_is_first_listed() {
        assert_eq!(Region::Us.default_locale(), "en_US");
        assert_eq!(Region::Eu.default_locale(), "en_GB");
        assert_eq!(Region::Kr.default_locale(), "ko_KR");
        assert_eq!(Region::Tw.default_locale(), "zh_TW");
        assert_eq!(Region::Cn.default_locale(), "zh_CN");
        for region in Region::ALL {
            assert_eq!(region.default_locale(), region.locales()[0]);
        }
    }

    #[test]
    fn validate_locale_checks_membership() {
        assert!(Region::Eu.supports_locale("fr_FR"));
        assert!(!Region::Eu.supports_locale("en_US"));
        assert!(!Region::Eu.supports_locale("fr_fr"));

        assert_eq!(Region::Eu.validate_locale("de_DE").unwrap(), "de_DE");
        let err = Region::Eu.validate_locale("en_US").unwrap_err();
        assert!(matches!(err, WowApiError::InvalidLocale { ref region, .. } if region == "EU"));
    }

    #[test]
    fn hosts_build_endpoint_urls() {
        let hosts = Region::Us.hosts();
        assert_eq!(hosts.oauth_url("/oauth/token"), "https://us.battle.net/oauth/token");
        assert_eq!(
            hosts.game_url("/data/wow/token/index"),
            "https://us.api.blizzard.com/data/wow/token/index"
        );
        assert_eq!(Region::Cn.hosts().game, "https://gateway.battlenet.com.cn");
    }

    #[test]
    fn slug_is_lowercase_name() {
        for region in Region::ALL {
            assert_eq!(region.slug(), region.name().to_lowercase());
        }
    }
}
