//! REST API client module for TradeScan.
//!
//! This module provides the high-level endpoint client for the TradeScan
//! API: blockchain, market, account and order-book data.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tradehub_sdk::api::TradehubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to the public TradeScan endpoint; the token catalog is
//!     // fetched before the client is returned.
//!     let client = TradehubClient::builder().connect().await?;
//!
//!     let markets = client.get_markets(&Default::default()).await?;
//!     println!("markets: {markets}");
//!
//!     let orderbook = client.get_orderbook("swth_eth", Some(10)).await?;
//!     println!("orderbook: {orderbook}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! The endpoint is selected either by URL or by node host/port, never both:
//!
//! ```rust,ignore
//! use tradehub_sdk::api::TradehubClient;
//!
//! // Direct URL
//! let client = TradehubClient::builder()
//!     .api_url("https://tradescan.switcheo.org")
//!     .timeout_secs(60)
//!     .connect()
//!     .await?;
//!
//! // Node host (port defaults to 5001)
//! let client = TradehubClient::builder()
//!     .node_host("54.255.5.46")
//!     .connect()
//!     .await?;
//! ```

pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::{TradehubClient, TradehubClientBuilder};
pub use types::*;
