pub mod fetch_helpers;
pub mod logging;

pub use fetch_helpers::{slug, timed_fetch};
pub use logging::{log_fetch_outcome, outcome_label};
