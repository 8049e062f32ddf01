//! Error conversions for infrastructure dependencies

mod conversions;

pub use conversions::InfraError;
