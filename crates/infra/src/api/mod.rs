//! Game API client
//!
//! This module provides the authenticated, region/locale-aware client that
//! every resource accessor calls into.
//!
//! # Architecture
//!
//! - All HTTP goes through [`crate::http::RequestGate`]
//! - OAuth client-credentials tokens are cached per region
//! - Region and locale are resolved once per request

pub mod auth;
pub mod client;

pub use auth::OAuthTokenService;
pub use client::{ApiClient, SessionGuard};
