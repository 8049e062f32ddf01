//! # wowapi Core
//!
//! Transport-independent logic of the client.
//!
//! This crate contains:
//! - Port interfaces (traits) implemented by the infrastructure layer
//! - The per-region OAuth token cache
//! - Realm index matching used to turn user input into realm slugs
//!
//! ## Architecture Principles
//! - Only depends on `wowapi-common` and `wowapi-domain`
//! - No HTTP code; every network call goes through [`HttpTransport`]
//! - Time comes from an injected [`wowapi_common::Clock`]

pub mod auth;
pub mod ports;
pub mod realms;

pub use auth::TokenCache;
pub use ports::{AccessTokenProvider, HttpTransport, TransportResponse};
pub use realms::RealmIndex;
