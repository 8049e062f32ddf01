//! HTTP transport and the request gate

pub mod client;
pub mod gate;

pub use client::{ReqwestTransport, ReqwestTransportBuilder};
pub use gate::{GatePolicy, RequestGate};
