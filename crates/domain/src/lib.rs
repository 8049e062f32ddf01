//! # wowapi Domain
//!
//! Domain types for the Battle.net World of Warcraft API client.
//!
//! This crate contains:
//! - The error type and `Result` alias shared by every crate
//! - The closed set of API regions with their hosts and locales
//! - Client configuration and its builder
//! - Request, namespace and token value types
//! - Pure helpers (gold formatting, armory link parsing)
//!
//! ## Architecture
//! - No dependencies on other wowapi crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod region;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use region::{IntoRegion, Region, RegionHosts};
pub use types::*;
pub use utils::armory::{parse_armory_link, ArmoryLink};
pub use utils::gold::format_gold;
