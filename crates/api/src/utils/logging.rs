use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use wowapi_domain::Result;

/// Log the outcome of one accessor call with structured fields.
///
/// # Parameters
/// * `endpoint` - Logical accessor identifier (e.g. `"retail::item"`).
/// * `elapsed` - Time the call took, retries included.
/// * `result` - What the accessor is about to return.
///
/// Callers must not put character names or tokens into `endpoint`.
#[inline]
pub fn log_fetch_outcome(endpoint: &str, elapsed: Duration, result: &Result<Option<Value>>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let outcome = outcome_label(result);

    match result {
        Ok(Some(_)) => debug!(endpoint, duration_ms, outcome, "fetch_success"),
        Ok(None) | Err(_) => warn!(endpoint, duration_ms, outcome, "fetch_failure"),
    }
}

/// Stable label for a fetch result: `ok`, `swallowed`, or the error category.
#[inline]
pub fn outcome_label(result: &Result<Option<Value>>) -> &'static str {
    match result {
        Ok(Some(_)) => "ok",
        Ok(None) => "swallowed",
        Err(err) => err.category(),
    }
}

#[cfg(test)]
mod tests {
    use wowapi_domain::WowApiError;

    use super::*;

    #[test]
    fn labels_distinguish_swallowed_failures_from_errors() {
        assert_eq!(outcome_label(&Ok(Some(Value::Null))), "ok");
        assert_eq!(outcome_label(&Ok(None)), "swallowed");
        assert_eq!(
            outcome_label(&Err(WowApiError::Http { status: 404, url: "u".into() })),
            "http"
        );
        assert_eq!(outcome_label(&Err(WowApiError::AccessToken("denied".into()))), "access_token");
    }

    #[test]
    fn logging_handles_every_outcome() {
        log_fetch_outcome("test::ok", Duration::from_millis(3), &Ok(Some(Value::Null)));
        log_fetch_outcome("test::none", Duration::ZERO, &Ok(None));
        log_fetch_outcome("test::err", Duration::MAX, &Err(WowApiError::Network("reset".into())));
    }
}
