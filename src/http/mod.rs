//! HTTP transport layer.
//!
//! [`TradehubHttp`] performs one round trip per call and has no knowledge of
//! individual endpoints; [`Params`] assembles query parameters with the
//! omit-absent semantics the API expects.

pub mod client;
pub mod params;

pub use client::TradehubHttp;
pub use params::Params;
