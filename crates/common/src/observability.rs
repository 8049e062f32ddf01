//! Tracing subscriber setup
//!
//! Library code only emits `tracing` events. Binaries and tests that want to
//! see them call one of these helpers once at startup. `RUST_LOG` takes
//! precedence over the default filter.

use tracing_subscriber::EnvFilter;

/// Returned when a global subscriber is already installed.
#[derive(Debug)]
pub struct TracingInitError(String);

impl std::fmt::Display for TracingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.0)
    }
}

impl std::error::Error for TracingInitError {}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a human-readable fmt subscriber.
///
/// # Errors
/// Returns [`TracingInitError`] if a global subscriber was already set.
pub fn init_tracing(default_filter: &str) -> Result<(), TracingInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .try_init()
        .map_err(|e| TracingInitError(e.to_string()))
}

/// Install a JSON subscriber, one event per line.
///
/// # Errors
/// Returns [`TracingInitError`] if a global subscriber was already set.
pub fn init_tracing_json(default_filter: &str) -> Result<(), TracingInitError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(default_filter))
        .try_init()
        .map_err(|e| TracingInitError(e.to_string()))
}
