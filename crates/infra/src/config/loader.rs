//! Configuration loader
//!
//! Loads [`ClientConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment if one exists
//! 2. Attempts to load from environment variables
//! 3. If credentials are missing there, falls back to loading from file;
//!    any other invalid variable is reported, not skipped
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `WOWAPI_CLIENT_ID`: OAuth client id (required)
//! - `WOWAPI_CLIENT_SECRET`: OAuth client secret (required)
//! - `WOWAPI_REGION`: Region identifier (`us`, `eu`, `kr`, `tw`, `cn`)
//! - `WOWAPI_LOCALE`: Locale within the region
//! - `WOWAPI_MAX_PARALLEL_REQUESTS`: Concurrency cap
//! - `WOWAPI_MAX_REQUEST_RETRIES`: Attempts per request
//! - `WOWAPI_REQUEST_RETRY_DELAY_SECS`: Delay between attempts in seconds
//! - `WOWAPI_RAISE_ON_FAILURE`: Propagate final failures (true/false)
//! - `WOWAPI_BASE_URL`: Origin replacing the region hosts
//!
//! ## File Locations
//! The loader looks for `wowapi.toml` then `wowapi.json` in the current working
//! directory, its parent and its grandparent.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use wowapi_domain::{ClientConfig, ClientConfigBuilder, Result, WowApiError};

const CONFIG_FILE_NAMES: [&str; 2] = ["wowapi.toml", "wowapi.json"];
const CLIENT_ID_VAR: &str = "WOWAPI_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "WOWAPI_CLIENT_SECRET";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `WowApiError::Config` if configuration cannot be loaded from
/// either source, and the region/locale errors of
/// [`ClientConfigBuilder::build`] for invalid values.
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    if optional_env(CLIENT_ID_VAR).is_none() || optional_env(CLIENT_SECRET_VAR).is_none() {
        tracing::debug!("No credentials in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `WowApiError::Config` if credentials are missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<ClientConfig> {
    let settings = FileConfig {
        client_id: env_var(CLIENT_ID_VAR)?,
        client_secret: env_var(CLIENT_SECRET_VAR)?,
        region: optional_env("WOWAPI_REGION"),
        locale: optional_env("WOWAPI_LOCALE"),
        max_parallel_requests: env_parse("WOWAPI_MAX_PARALLEL_REQUESTS")?,
        max_request_retries: env_parse("WOWAPI_MAX_REQUEST_RETRIES")?,
        request_retry_delay_secs: env_parse("WOWAPI_REQUEST_RETRY_DELAY_SECS")?,
        raise_on_failure: env_bool("WOWAPI_RAISE_ON_FAILURE")?,
        base_url: optional_env("WOWAPI_BASE_URL"),
    };
    settings.into_builder().build()
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations.
///
/// # Errors
/// Returns `WowApiError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WowApiError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            WowApiError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WowApiError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)?.into_builder().build()
}

/// Settings as they appear in a config file.
#[derive(Debug, Clone, Deserialize)]
struct FileConfig {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    max_parallel_requests: Option<usize>,
    #[serde(default)]
    max_request_retries: Option<u32>,
    #[serde(default)]
    request_retry_delay_secs: Option<i64>,
    #[serde(default)]
    raise_on_failure: Option<bool>,
    #[serde(default)]
    base_url: Option<String>,
}

impl FileConfig {
    fn into_builder(self) -> ClientConfigBuilder {
        let mut builder = ClientConfig::builder(self.client_id, self.client_secret);
        if let Some(region) = self.region {
            builder = builder.region(region);
        }
        if let Some(locale) = self.locale {
            builder = builder.locale(locale);
        }
        if let Some(max) = self.max_parallel_requests {
            builder = builder.max_parallel_requests(max);
        }
        if let Some(retries) = self.max_request_retries {
            builder = builder.max_request_retries(retries);
        }
        if let Some(delay) = self.request_retry_delay_secs {
            builder = builder.request_retry_delay_secs(delay);
        }
        if let Some(raise) = self.raise_on_failure {
            builder = builder.raise_on_failure(raise);
        }
        if let Some(url) = self.base_url {
            builder = builder.base_url(url);
        }
        builder
    }
}

/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<FileConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WowApiError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WowApiError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(WowApiError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_from(&cwd)
}

fn find_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(3)
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| WowApiError::Config(format!("Missing required environment variable: {key}")))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| WowApiError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    optional_env(key).map(|raw| parse_bool(key, &raw)).transpose()
}

/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WowApiError::Config(format!(
            "Invalid value for {key}: expected true/false, 1/0, yes/no or on/off, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::Duration;

    use once_cell::sync::Lazy;
    use tempfile::{Builder, TempDir};
    use wowapi_domain::Region;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 9] = [
        "WOWAPI_CLIENT_ID",
        "WOWAPI_CLIENT_SECRET",
        "WOWAPI_REGION",
        "WOWAPI_LOCALE",
        "WOWAPI_MAX_PARALLEL_REQUESTS",
        "WOWAPI_MAX_REQUEST_RETRIES",
        "WOWAPI_REQUEST_RETRY_DELAY_SECS",
        "WOWAPI_RAISE_ON_FAILURE",
        "WOWAPI_BASE_URL",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_bool() {
        for truthy in ["1", "true", "YES", "on", " True "] {
            assert!(parse_bool("K", truthy).unwrap(), "{truthy}");
        }
        for falsy in ["0", "false", "no", "OFF"] {
            assert!(!parse_bool("K", falsy).unwrap(), "{falsy}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_unknown_values() {
        for bad in ["ture", "maybe", "2", "enabled"] {
            let err = parse_bool("WOWAPI_RAISE_ON_FAILURE", bad).unwrap_err();
            assert!(
                matches!(err, WowApiError::Config(ref msg) if msg.contains("WOWAPI_RAISE_ON_FAILURE")),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn test_misspelled_flag_is_reported_not_ignored() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("WOWAPI_CLIENT_ID", "id");
        std::env::set_var("WOWAPI_CLIENT_SECRET", "secret");
        std::env::set_var("WOWAPI_RAISE_ON_FAILURE", "ture");

        let from_env = load_from_env();
        let loaded = load();
        clear_env();

        for result in [from_env, loaded] {
            assert!(
                matches!(result, Err(WowApiError::Config(ref msg)) if msg.contains("ture")),
                "{result:?}"
            );
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("WOWAPI_CLIENT_ID", "id");
        std::env::set_var("WOWAPI_CLIENT_SECRET", "secret");
        std::env::set_var("WOWAPI_REGION", "eu");
        std::env::set_var("WOWAPI_LOCALE", "de_DE");
        std::env::set_var("WOWAPI_MAX_PARALLEL_REQUESTS", "8");
        std::env::set_var("WOWAPI_MAX_REQUEST_RETRIES", "5");
        std::env::set_var("WOWAPI_REQUEST_RETRY_DELAY_SECS", "0");
        std::env::set_var("WOWAPI_RAISE_ON_FAILURE", "false");
        std::env::set_var("WOWAPI_BASE_URL", "http://localhost:8080/");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.client_id(), "id");
        assert_eq!(config.region(), Region::Eu);
        assert_eq!(config.locale(), "de_DE");
        assert_eq!(config.max_parallel_requests(), 8);
        assert_eq!(config.max_request_retries(), 5);
        assert_eq!(config.request_retry_delay(), Duration::from_secs(1));
        assert!(!config.raise_on_failure());
        assert_eq!(config.base_url(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_load_from_env_missing_credentials() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, WowApiError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("WOWAPI_CLIENT_ID", "id");
        std::env::set_var("WOWAPI_CLIENT_SECRET", "secret");
        std::env::set_var("WOWAPI_MAX_REQUEST_RETRIES", "lots");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(WowApiError::Config(msg)) if msg.contains("WOWAPI_MAX_REQUEST_RETRIES")));
    }

    #[test]
    fn test_load_from_env_invalid_region() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("WOWAPI_CLIENT_ID", "id");
        std::env::set_var("WOWAPI_CLIENT_SECRET", "secret");
        std::env::set_var("WOWAPI_REGION", "oceania");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(WowApiError::InvalidRegion { .. })));
    }

    #[test]
    fn test_load_from_file_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
client_id = "id"
client_secret = "secret"
region = "KR"
max_parallel_requests = 0
raise_on_failure = false
"#
        )
        .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.region(), Region::Kr);
        assert_eq!(config.locale(), "ko_KR");
        assert_eq!(config.max_parallel_requests(), 1);
        assert!(!config.raise_on_failure());
    }

    #[test]
    fn test_load_from_file_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            file,
            r#"{{"client_id": "id", "client_secret": "secret", "region": "eu", "locale": "fr_FR"}}"#
        )
        .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.region(), Region::Eu);
        assert_eq!(config.locale(), "fr_FR");
    }

    #[test]
    fn test_load_from_file_invalid_contents() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "client_id = ").unwrap();

        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, WowApiError::Config(msg) if msg.contains("TOML")));
    }

    #[test]
    fn test_load_from_file_missing() {
        let err = load_from_file(Some(PathBuf::from("/definitely/not/here/wowapi.toml")))
            .unwrap_err();
        assert!(matches!(err, WowApiError::Config(_)));
    }

    #[test]
    fn test_search_walks_up_two_levels() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_from(&nested), None);

        let config = root.path().join("wowapi.json");
        std::fs::write(&config, "{}").unwrap();
        assert_eq!(find_from(&nested), Some(config));

        let deeper = nested.join("c");
        std::fs::create_dir_all(&deeper).unwrap();
        assert_eq!(find_from(&deeper), None);
    }

    #[test]
    fn test_search_prefers_toml() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("wowapi.json"), "{}").unwrap();
        std::fs::write(root.path().join("wowapi.toml"), "").unwrap();

        assert_eq!(find_from(root.path()), Some(root.path().join("wowapi.toml")));
    }
}
