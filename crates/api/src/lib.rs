//! # wowapi
//!
//! Async client for the Battle.net World of Warcraft web APIs.
//!
//! This crate contains:
//! - [`WowApi`], which owns the shared [`ApiClient`] and hands it to the
//!   accessor groups
//! - Accessor groups for retail game data, retail profiles and classic game
//!   data
//! - Realm slug lookup, armory link parsing and gold formatting helpers
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Accessors are thin: each formats a path and namespace and calls
//!   [`ApiClient::fetch_resource`]
//!
//! ## Example
//!
//! ```no_run
//! use wowapi::{ClientConfig, WowApi};
//!
//! # async fn run() -> wowapi::Result<()> {
//! let config = ClientConfig::builder("client-id", "client-secret").region("eu").build()?;
//! let api = WowApi::new(config);
//!
//! if let Some(token) = api.retail().game_data().token_index().await? {
//!     println!("token price: {}", token["price"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classic;
pub mod context;
pub mod retail;
pub mod utils;

// Re-export for convenience
pub use context::WowApi;
pub use wowapi_domain::{
    format_gold, parse_armory_link, ArmoryLink, ClientConfig, ClientConfigBuilder, Namespace,
    Region, Result, TokenPlacement, WowApiError,
};
pub use wowapi_common::observability::{init_tracing, init_tracing_json};
pub use wowapi_infra::{config, ApiClient, SessionGuard};
