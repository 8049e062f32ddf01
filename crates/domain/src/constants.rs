//! Client constants
//!
//! Defaults applied by the config builder and fixed protocol values.

// Configuration defaults
pub const DEFAULT_MAX_PARALLEL_REQUESTS: usize = 50;
pub const DEFAULT_MAX_REQUEST_RETRIES: u32 = 3;
pub const DEFAULT_REQUEST_RETRY_DELAY_SECS: u64 = 1;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("wowapi/", env!("CARGO_PKG_VERSION"));

// OAuth
pub const OAUTH_TOKEN_PATH: &str = "/oauth/token";
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
/// Subtracted from the server-reported token lifetime.
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

// Query parameter names sent with every game API request
pub const PARAM_NAMESPACE: &str = "namespace";
pub const PARAM_LOCALE: &str = "locale";
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

// Money
pub const COPPER_PER_SILVER: u64 = 100;
pub const COPPER_PER_GOLD: u64 = 10_000;
