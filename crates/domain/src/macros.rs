//! Macro for closed enums that are identified by a canonical name
//!
//! Regions and HTTP methods are both small closed sets that users pass in as
//! strings. The macro generates the name table once: `ALL`, `as_str`,
//! case-insensitive `from_name`, `names` for error messages, and `Display`.
//!
//! # Example
//!
//! ```rust
//! use wowapi_domain::impl_domain_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Faction {
//!     Alliance,
//!     Horde,
//! }
//!
//! impl_domain_name_conversions!(Faction {
//!     Alliance => "ALLIANCE",
//!     Horde => "HORDE",
//! });
//!
//! assert_eq!(Faction::from_name("horde"), Some(Faction::Horde));
//! assert_eq!(Faction::Alliance.to_string(), "ALLIANCE");
//! ```

/// Implements the name table and `Display` for a closed enum
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical names
///
/// Lookup through `from_name` ignores ASCII case; `Display` always writes
/// the canonical form.
#[macro_export]
macro_rules! impl_domain_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// Canonical name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            /// Case-insensitive lookup by canonical name.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str().eq_ignore_ascii_case(name))
            }

            /// Canonical names of every variant, in declaration order.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        First,
        Second,
    }

    impl_domain_name_conversions!(TestKind {
        First => "FIRST",
        Second => "SECOND",
    });

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(TestKind::First.to_string(), "FIRST");
        assert_eq!(TestKind::Second.as_str(), "SECOND");
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(TestKind::from_name("first"), Some(TestKind::First));
        assert_eq!(TestKind::from_name("SeCoNd"), Some(TestKind::Second));
        assert_eq!(TestKind::from_name("third"), None);
        assert_eq!(TestKind::from_name(""), None);
    }

    #[test]
    fn all_and_names_keep_declaration_order() {
        assert_eq!(TestKind::ALL, &[TestKind::First, TestKind::Second]);
        assert_eq!(TestKind::names(), vec!["FIRST", "SECOND"]);
    }
}
