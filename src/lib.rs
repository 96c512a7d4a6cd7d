//! # TradeHub Rust SDK
//!
//! A Rust SDK for the TradeHub blockchain's TradeScan REST API: read-only
//! access to blockchain, market, account and order-book data.
//!
//! ## Modules
//!
//! - [`api`]: the endpoint client — one method per TradeScan operation
//! - [`http`]: the low-level transport shared by every endpoint method
//! - [`error`]: the error taxonomy (configuration, transport, API)
//! - [`network`]: endpoint URL and timeout constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradehub_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TradehubClient::builder().connect().await?;
//!
//!     let stats = client.get_market_stats(Some("SWTH_ETH")).await?;
//!     println!("{stats}");
//!
//!     let trades = client
//!         .get_trades(&TradesFilter::new().with_market("swth_eth").with_limit(20))
//!         .await?;
//!     println!("{trades}");
//!
//!     Ok(())
//! }
//! ```

/// Endpoint client for the TradeScan REST API.
pub mod api;

/// Unified SDK error types.
pub mod error;

/// Low-level HTTP transport and query-parameter assembly.
pub mod http;

/// Network URL and timeout constants.
pub mod network;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tradehub_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        fee_schedule, BlocksFilter, CandlesticksRequest, MarketsFilter, PageFilter, Token,
        TradehubClient, TradehubClientBuilder, TradesFilter, TransactionsFilter, TxnFee,
    };
    pub use crate::error::{ApiError, ConfigError, Error, Result, TransportError};
    pub use crate::http::{Params, TradehubHttp};
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_NODE_PORT, DEFAULT_TIMEOUT_SECS};
}
