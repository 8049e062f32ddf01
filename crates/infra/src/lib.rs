//! # wowapi Infrastructure
//!
//! Implementations of the core ports and the request engine built on them.
//!
//! This crate contains:
//! - [`ReqwestTransport`], the HTTP transport with optional pooled sessions
//! - [`RequestGate`], the bounded-concurrency, bounded-retry executor
//! - [`OAuthTokenService`], client-credentials token acquisition
//! - [`ApiClient`], the region/locale-aware entry point used by accessors
//! - Configuration loading from the environment or a file
//!
//! ## Architecture
//! - Implements traits defined in `wowapi-core`
//! - Contains all I/O (network, environment, filesystem)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, OAuthTokenService, SessionGuard};
pub use errors::InfraError;
pub use http::{GatePolicy, ReqwestTransport, ReqwestTransportBuilder, RequestGate};
