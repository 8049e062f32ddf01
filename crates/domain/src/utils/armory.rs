//! Armory link parsing
//!
//! Character pages look like
//! `https://worldofwarcraft.com/en-us/character/us/{realm-slug}/{name}`.
//! Names may contain non-ASCII letters and arrive percent-encoded.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::region::Region;

static ARMORY_PATH: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"/(us|eu|kr|tw|cn)/([0-9\-\w]+)/(\w+)").ok());

/// Character identity extracted from an armory link. All parts are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmoryLink {
    pub name: String,
    pub realm: String,
    pub region: Region,
}

/// Extract name, realm slug and region from an armory URL.
///
/// Returns `None` when the URL does not contain a character path.
pub fn parse_armory_link(url: &str) -> Option<ArmoryLink> {
    let decoded = urlencoding::decode(url).map(|s| s.into_owned()).unwrap_or_else(|_| url.to_string());
    let captures = ARMORY_PATH.as_ref()?.captures(&decoded)?;

    let region = Region::resolve(captures.get(1)?.as_str()).ok()?;
    let realm = captures.get(2)?.as_str().to_lowercase();
    let name = captures.get(3)?.as_str().to_lowercase();

    Some(ArmoryLink { name, realm, region })
}
