//! Error types used throughout the client

use thiserror::Error;

/// Main error type for wowapi
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WowApiError {
    #[error("Invalid API region {region}, supported regions are {supported:?}")]
    InvalidRegion { region: String, supported: Vec<&'static str> },

    #[error("Invalid regional locale {locale}, supported locales for {region} are {supported:?}")]
    InvalidLocale { locale: String, region: String, supported: Vec<&'static str> },

    #[error("Invalid HTTP request method {method}, supported methods are {supported:?}")]
    UnsupportedMethod { method: String, supported: Vec<&'static str> },

    #[error(
        "Failed to retrieve an access token ({0}), verify your credentials & internet connectivity"
    )]
    AccessToken(String),

    #[error("HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WowApiError {
    /// Transient failures that the request gate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Network(_) | Self::Decode(_))
    }

    /// Stable label for logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRegion { .. } => "invalid_region",
            Self::InvalidLocale { .. } => "invalid_locale",
            Self::UnsupportedMethod { .. } => "unsupported_method",
            Self::AccessToken(_) => "access_token",
            Self::Http { .. } => "http",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for wowapi operations
pub type Result<T> = std::result::Result<T, WowApiError>;
