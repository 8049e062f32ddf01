//! Namespace templates
//!
//! The game API versions each resource category by namespace, e.g.
//! `static-us` or `dynamic-classic-eu`. Templates hold a literal `{region}`
//! token that is replaced with the lowercase region identifier.

use std::borrow::Cow;
use std::fmt;

use crate::region::Region;

const REGION_TOKEN: &str = "{region}";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(Cow<'static, str>);

impl Namespace {
    pub const STATIC: Self = Self::from_static("static-{region}");
    pub const DYNAMIC: Self = Self::from_static("dynamic-{region}");
    pub const PROFILE: Self = Self::from_static("profile-{region}");
    pub const STATIC_CLASSIC: Self = Self::from_static("static-classic-{region}");
    pub const DYNAMIC_CLASSIC: Self = Self::from_static("dynamic-classic-{region}");
    pub const PROFILE_CLASSIC: Self = Self::from_static("profile-classic-{region}");

    pub const fn from_static(template: &'static str) -> Self {
        Self(Cow::Borrowed(template))
    }

    pub fn new(template: impl Into<String>) -> Self {
        Self(Cow::Owned(template.into()))
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    /// Substitute every `{region}` token.
    pub fn render(&self, region: Region) -> String {
        self.0.replace(REGION_TOKEN, region.slug())
    }
}

impl From<&'static str> for Namespace {
    fn from(template: &'static str) -> Self {
        Self::from_static(template)
    }
}

impl From<String> for Namespace {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
