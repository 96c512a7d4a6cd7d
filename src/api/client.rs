//! TradeScan REST API client implementation.
//!
//! [`TradehubClient`] provides one method per read endpoint of the
//! TradeScan API, a builder for endpoint selection, and the token catalog
//! fetched once at construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use tradehub_sdk::api::TradehubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TradehubClient::builder().connect().await?;
//!
//!     let status = client.get_status().await?;
//!     println!("chain status: {status}");
//!
//!     // Token catalog lookups never touch the network.
//!     if let Some(swth) = client.get_token("SWTH") {
//!         println!("swth has {} decimals", swth.decimals);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::api::types::{
    fee_schedule, BlocksFilter, CandlesticksRequest, MarketsFilter, PageFilter, Token,
    TradesFilter, TransactionsFilter, TxnFee,
};
use crate::error::{ConfigError, Error, Result, TransportError};
use crate::http::{Params, TradehubHttp};
use crate::network::{DEFAULT_API_URL, DEFAULT_NODE_PORT, DEFAULT_TIMEOUT_SECS};

/// Build a one-entry parameter set.
fn one(key: &'static str, value: impl ToString) -> Params {
    let mut params = Params::new();
    params.push(key, value);
    params
}

/// Builder for configuring [`TradehubClient`].
///
/// The endpoint is selected either by a direct base URL or by a node
/// host/port pair, never both.
#[derive(Debug, Clone)]
pub struct TradehubClientBuilder {
    api_url: Option<String>,
    node_host: Option<String>,
    node_port: Option<u16>,
    timeout: Duration,
}

impl Default for TradehubClientBuilder {
    fn default() -> Self {
        Self {
            api_url: None,
            node_host: None,
            node_port: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TradehubClientBuilder {
    /// Set a direct base URL (e.g. `https://tradescan.switcheo.org`).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set a node host; the base URL becomes `http://{host}:{port}`.
    pub fn node_host(mut self, host: impl Into<String>) -> Self {
        self.node_host = Some(host.into());
        self
    }

    /// Set the node REST port. Defaults to 5001 when a host is given.
    pub fn node_port(mut self, port: u16) -> Self {
        self.node_port = Some(port);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Resolve the endpoint selection into a base URL.
    fn endpoint_url(&self) -> std::result::Result<String, ConfigError> {
        if self.api_url.is_some() && self.node_host.is_some() {
            return Err(ConfigError::AmbiguousEndpoint);
        }
        if self.node_port.is_some() && self.node_host.is_none() {
            return Err(ConfigError::MissingHost);
        }
        Ok(match (&self.api_url, &self.node_host) {
            (Some(url), _) => url.trim_end_matches('/').to_string(),
            (None, Some(host)) => {
                format!("http://{}:{}", host, self.node_port.unwrap_or(DEFAULT_NODE_PORT))
            }
            (None, None) => DEFAULT_API_URL.to_string(),
        })
    }

    /// Validate the configuration, bootstrap the token catalog and return
    /// the ready client.
    ///
    /// Configuration errors are reported before any network I/O. A failed
    /// catalog fetch fails construction; there is no partially-initialized
    /// client.
    pub async fn connect(self) -> Result<TradehubClient> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout.into());
        }
        let base_url = self.endpoint_url()?;
        let http = TradehubHttp::new(&base_url, self.timeout)?;

        let mut client = TradehubClient {
            http,
            tokens: Vec::new(),
            denoms: Vec::new(),
        };
        client.refresh_tokens().await?;
        Ok(client)
    }
}

/// TradeScan REST API client.
///
/// All methods are read-only and issue at most one HTTP round trip. The
/// only state beyond the transport is the token catalog, populated once by
/// [`TradehubClientBuilder::connect`] and refreshed only on an explicit
/// [`refresh_tokens`](TradehubClient::refresh_tokens) call.
///
/// Unless noted otherwise, methods return the parsed JSON body exactly as
/// the server sent it.
#[derive(Debug, Clone)]
pub struct TradehubClient {
    http: TradehubHttp,
    tokens: Vec<Token>,
    denoms: Vec<String>,
}

impl TradehubClient {
    /// Create a builder with default settings.
    pub fn builder() -> TradehubClientBuilder {
        TradehubClientBuilder::default()
    }

    /// Connect to the given base URL with default settings.
    pub async fn connect(api_url: impl Into<String>) -> Result<Self> {
        Self::builder().api_url(api_url).connect().await
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // =========================================================================
    // Token catalog
    // =========================================================================

    /// The token catalog fetched at construction.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Denoms of the cached catalog, in catalog order.
    pub fn token_denoms(&self) -> &[String] {
        &self.denoms
    }

    /// Look up a cached token by denom.
    ///
    /// The denom is compared case-insensitively against the catalog; an
    /// unknown denom yields `None`, not an error.
    pub fn get_token(&self, denom: &str) -> Option<&Token> {
        let denom = denom.to_lowercase();
        if !self.denoms.iter().any(|d| *d == denom) {
            return None;
        }
        self.tokens.iter().find(|t| t.denom == denom)
    }

    /// Re-fetch the token catalog.
    ///
    /// The catalog is never refreshed implicitly; a client holds the
    /// catalog from construction until this is called.
    pub async fn refresh_tokens(&mut self) -> Result<()> {
        let tokens = self.get_tokens().await?;
        self.denoms = tokens.iter().map(|t| t.denom.clone()).collect();
        self.tokens = tokens;
        Ok(())
    }

    /// Fetch the token list from the chain.
    pub async fn get_tokens(&self) -> Result<Vec<Token>> {
        let raw = self.http.get("/get_tokens", &Params::new()).await?;
        Ok(serde_json::from_value(raw)?)
    }

    // =========================================================================
    // Chain
    // =========================================================================

    /// Get node and chain status.
    pub async fn get_status(&self) -> Result<Value> {
        self.http.get("/get_status", &Params::new()).await
    }

    /// Get the latest block time.
    pub async fn get_block_time(&self) -> Result<Value> {
        self.http.get("/get_block_time", &Params::new()).await
    }

    /// List blocks, newest first.
    pub async fn get_blocks(&self, filter: &BlocksFilter) -> Result<Value> {
        self.http.get("/get_blocks", &filter.params()).await
    }

    /// List transactions.
    pub async fn get_transactions(&self, filter: &TransactionsFilter) -> Result<Value> {
        self.http.get("/get_transactions", &filter.params()).await
    }

    /// Get a transaction by hash.
    pub async fn get_transaction(&self, hash: &str) -> Result<Value> {
        self.http.get("/get_txn", &one("hash", hash)).await
    }

    /// List the message types the chain accepts.
    pub async fn get_transaction_types(&self) -> Result<Value> {
        self.http.get("/get_transaction_types", &Params::new()).await
    }

    /// Get the fee schedule as a `msg_type → fee` map.
    ///
    /// Duplicate entries in the raw schedule keep the last fee seen.
    pub async fn get_transaction_fees(&self) -> Result<HashMap<String, String>> {
        let raw = self.http.get("/get_txns_fees", &Params::new()).await?;
        let entries: Vec<TxnFee> = serde_json::from_value(raw)?;
        Ok(fee_schedule(entries))
    }

    /// List all validators.
    pub async fn get_all_validators(&self) -> Result<Value> {
        self.http.get("/get_all_validators", &Params::new()).await
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Get account details by address.
    pub async fn get_account(&self, address: &str) -> Result<Value> {
        self.http.get("/get_account", &one("account", address)).await
    }

    /// Get token balances for an address.
    pub async fn get_balance(&self, address: &str) -> Result<Value> {
        self.http.get("/get_balance", &one("account", address)).await
    }

    /// Get the profile attached to an address.
    pub async fn get_profile(&self, address: &str) -> Result<Value> {
        self.http.get("/get_profile", &one("account", address)).await
    }

    /// Check whether a username is taken.
    pub async fn get_username_check(&self, username: &str) -> Result<bool> {
        let raw = self
            .http
            .get("/username_check", &one("username", username))
            .await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Resolve a username to its address.
    ///
    /// The server answers with a bare JSON string, or a 404 when no account
    /// owns the username; the 404 surfaces as `Ok(None)`.
    pub async fn get_address(&self, username: &str) -> Result<Option<String>> {
        match self
            .http
            .get("/get_address", &one("username", username))
            .await
        {
            Ok(raw) => Ok(Some(serde_json::from_value(raw)?)),
            Err(Error::Transport(TransportError::Status { status: 404, .. })) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List cross-chain transfers in and out of an address.
    pub async fn get_external_transfers(&self, address: &str) -> Result<Value> {
        self.http
            .get("/get_external_transfers", &one("account", address))
            .await
    }

    /// Get pending delegation rewards for an address.
    pub async fn get_address_rewards(&self, address: &str) -> Result<Value> {
        let path = format!(
            "/distribution/delegators/{}/rewards",
            urlencoding::encode(address)
        );
        self.http.get(&path, &Params::new()).await
    }

    /// Get staking delegations for an address.
    pub async fn get_address_staking(&self, address: &str) -> Result<Value> {
        let path = format!(
            "/staking/delegators/{}/delegations",
            urlencoding::encode(address)
        );
        self.http.get(&path, &Params::new()).await
    }

    /// Get the largest holders of a token.
    ///
    /// May not be supported by current nodes.
    pub async fn get_rich_list(&self, token: &str) -> Result<Value> {
        self.http.get("/get_rich_list", &one("token", token)).await
    }

    /// Get chain-wide balance totals.
    ///
    /// May not be supported by current nodes.
    pub async fn get_total_balances(&self) -> Result<Value> {
        self.http.get("/get_total_balances", &Params::new()).await
    }

    // =========================================================================
    // Markets
    // =========================================================================

    /// List markets.
    pub async fn get_markets(&self, filter: &MarketsFilter) -> Result<Value> {
        self.http.get("/get_markets", &filter.params()).await
    }

    /// Get a market by symbol.
    pub async fn get_market(&self, market: &str) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", Some(market));
        self.http.get("/get_market", &params).await
    }

    /// Get 24-hour market statistics, optionally for a single market.
    pub async fn get_market_stats(&self, market: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", market);
        self.http.get("/get_market_stats", &params).await
    }

    /// Get the order book for a market, optionally limited per side.
    pub async fn get_orderbook(&self, market: &str, limit: Option<u32>) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", Some(market));
        params.push_opt("limit", limit);
        self.http.get("/get_orderbook", &params).await
    }

    /// Get last prices, optionally for a single market.
    pub async fn get_prices(&self, market: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", market);
        self.http.get("/get_prices", &params).await
    }

    /// Get candlestick history for a market.
    pub async fn get_candlesticks(&self, request: &CandlesticksRequest) -> Result<Value> {
        self.http.get("/candlesticks", &request.params()).await
    }

    /// Get the insurance fund balance.
    pub async fn get_insurance_balance(&self) -> Result<Value> {
        self.http.get("/get_insurance_balance", &Params::new()).await
    }

    // =========================================================================
    // Orders & trades
    // =========================================================================

    /// Get an order by id.
    pub async fn get_order(&self, order_id: &str) -> Result<Value> {
        self.http.get("/get_order", &one("order_id", order_id)).await
    }

    /// List orders for an address.
    pub async fn get_orders(&self, address: &str) -> Result<Value> {
        self.http.get("/get_orders", &one("account", address)).await
    }

    /// List recent trades.
    pub async fn get_trades(&self, filter: &TradesFilter) -> Result<Value> {
        self.http.get("/get_trades", &filter.params()).await
    }

    /// List trades for an account.
    ///
    /// May not be supported by current nodes.
    pub async fn get_trades_by_account(
        &self,
        address: &str,
        filter: &PageFilter,
    ) -> Result<Value> {
        let mut params = one("account", address);
        filter.apply(&mut params);
        self.http.get("/get_trades_by_account", &params).await
    }

    /// List recent liquidations.
    pub async fn get_liquidations(&self, filter: &PageFilter) -> Result<Value> {
        self.http.get("/get_liquidations", &filter.params()).await
    }

    // =========================================================================
    // Positions & leaderboards
    // =========================================================================

    /// Get an account's position in a market.
    ///
    /// May not be supported by current nodes.
    pub async fn get_position(&self, address: &str, market: &str) -> Result<Value> {
        let mut params = one("account", address);
        params.push_market("market", Some(market));
        self.http.get("/get_position", &params).await
    }

    /// List all positions for an account.
    ///
    /// May not be supported by current nodes.
    pub async fn get_positions(&self, address: &str) -> Result<Value> {
        self.http.get("/get_positions", &one("account", address)).await
    }

    /// Get an account's leverage in a market.
    ///
    /// May not be supported by current nodes.
    pub async fn get_leverage(&self, address: &str, market: &str) -> Result<Value> {
        let mut params = one("account", address);
        params.push_market("market", Some(market));
        self.http.get("/get_leverage", &params).await
    }

    /// Leaderboard of positions in a market by profit and loss.
    pub async fn get_positions_sorted_by_pnl(&self, market: &str) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", Some(market));
        self.http.get("/get_positions_sorted_by_pnl", &params).await
    }

    /// Leaderboard of positions in a market by size.
    pub async fn get_positions_sorted_by_size(&self, market: &str) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", Some(market));
        self.http.get("/get_positions_sorted_by_size", &params).await
    }

    /// Leaderboard of positions in a market by liquidation risk.
    ///
    /// May not be supported by current nodes.
    pub async fn get_positions_sorted_by_risk(&self, market: &str) -> Result<Value> {
        let mut params = Params::new();
        params.push_market("market", Some(market));
        self.http.get("/get_positions_sorted_by_risk", &params).await
    }

    // =========================================================================
    // Oracles
    // =========================================================================

    /// List the latest result of every oracle.
    pub async fn get_oracle_results(&self) -> Result<Value> {
        self.http.get("/get_oracle_results", &Params::new()).await
    }

    /// Get the latest result of a single oracle.
    pub async fn get_oracle_result(&self, oracle_id: &str) -> Result<Value> {
        self.http.get("/get_oracle_result", &one("id", oracle_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(denom: &str) -> Token {
        Token {
            denom: denom.to_string(),
            ..Token::default()
        }
    }

    fn catalog_client(tokens: Vec<Token>) -> TradehubClient {
        let denoms = tokens.iter().map(|t| t.denom.clone()).collect();
        TradehubClient {
            http: TradehubHttp::new(DEFAULT_API_URL, Duration::from_secs(1)).unwrap(),
            tokens,
            denoms,
        }
    }

    #[test]
    fn endpoint_defaults_to_public_api() {
        let builder = TradehubClient::builder();
        assert_eq!(builder.endpoint_url().unwrap(), DEFAULT_API_URL);
    }

    #[test]
    fn endpoint_from_url_strips_trailing_slash() {
        let builder = TradehubClient::builder().api_url("https://tradescan.switcheo.org/");
        assert_eq!(
            builder.endpoint_url().unwrap(),
            "https://tradescan.switcheo.org"
        );
    }

    #[test]
    fn endpoint_from_host_uses_default_port() {
        let builder = TradehubClient::builder().node_host("192.168.1.10");
        assert_eq!(builder.endpoint_url().unwrap(), "http://192.168.1.10:5001");
    }

    #[test]
    fn endpoint_from_host_and_port() {
        let builder = TradehubClient::builder()
            .node_host("192.168.1.10")
            .node_port(1317);
        assert_eq!(builder.endpoint_url().unwrap(), "http://192.168.1.10:1317");
    }

    #[test]
    fn url_and_host_are_mutually_exclusive() {
        let builder = TradehubClient::builder()
            .api_url("https://tradescan.switcheo.org")
            .node_host("192.168.1.10");
        assert_eq!(
            builder.endpoint_url().unwrap_err(),
            ConfigError::AmbiguousEndpoint
        );
    }

    #[test]
    fn port_without_host_is_rejected() {
        let builder = TradehubClient::builder().node_port(5001);
        assert_eq!(builder.endpoint_url().unwrap_err(), ConfigError::MissingHost);
    }

    #[tokio::test]
    async fn conflicting_endpoints_fail_before_any_network_call() {
        let err = TradehubClient::builder()
            .api_url("http://localhost:1")
            .node_host("localhost")
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::AmbiguousEndpoint)
        ));
    }

    #[tokio::test]
    async fn zero_timeout_fails_before_any_network_call() {
        let err = TradehubClient::builder()
            .api_url("http://localhost:1")
            .timeout(Duration::ZERO)
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn get_token_is_case_insensitive() {
        let client = catalog_client(vec![token("swth"), token("eth")]);
        assert_eq!(client.get_token("SWTH").unwrap().denom, "swth");
        assert_eq!(client.get_token("eth").unwrap().denom, "eth");
    }

    #[test]
    fn get_token_unknown_denom_is_none() {
        let client = catalog_client(vec![token("swth")]);
        assert!(client.get_token("doesnotexist").is_none());
    }

    #[test]
    fn token_denoms_follow_catalog_order() {
        let client = catalog_client(vec![token("swth"), token("eth"), token("dai")]);
        let denoms: Vec<&str> = client.token_denoms().iter().map(String::as_str).collect();
        assert_eq!(denoms, ["swth", "eth", "dai"]);
    }
}
