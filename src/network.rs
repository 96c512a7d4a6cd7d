//! Network constants for the TradeHub SDK.

/// Default TradeScan REST API base URL.
pub const DEFAULT_API_URL: &str = "https://tradescan.switcheo.org";

/// Default REST port when connecting to a TradeHub node by host.
pub const DEFAULT_NODE_PORT: u16 = 5001;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
