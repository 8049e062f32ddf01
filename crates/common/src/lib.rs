//! Small utilities shared across the wowapi crates.
//!
//! # Feature Tiers
//!
//! - default: the [`time`] clock abstraction
//! - `observability`: tracing subscriber setup helpers

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

#[cfg(feature = "observability")]
pub mod observability;
pub mod time;

pub use time::{Clock, MockClock, SystemClock};
