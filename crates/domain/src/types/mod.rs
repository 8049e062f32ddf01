//! Value types passed between the client layers

pub mod namespace;
pub mod request;
pub mod token;

pub use namespace::Namespace;
pub use request::{ApiRequest, BasicCredentials, HttpMethod};
pub use token::{CachedToken, TokenResponse};
