//! Token catalog types.

use serde::{Deserialize, Serialize};

/// A token known to the chain, as returned by `/get_tokens`.
///
/// Only `denom` is required on the wire; the remaining metadata defaults so
/// an unknown server revision never fails the catalog bootstrap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Chain-level denomination, the token's identifier (e.g. `"swth"`).
    pub denom: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Number of decimal places.
    #[serde(default)]
    pub decimals: i64,
    /// Originating blockchain (e.g. `"neo"`, `"eth"`).
    #[serde(default)]
    pub blockchain: String,
    /// Identifier of the chain the token settles on.
    #[serde(default)]
    pub chain_id: u64,
    /// External asset identifier or contract hash.
    #[serde(default)]
    pub asset_id: String,
    /// Whether the token is active.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the token can back collateralized positions.
    #[serde(default)]
    pub is_collateral: bool,
    /// Lock-proxy contract hash for cross-chain transfers.
    #[serde(default)]
    pub lock_proxy_hash: String,
    /// Supply delegated to validators, as a decimal string.
    #[serde(default)]
    pub delegated_supply: String,
    /// Address that originated the token.
    #[serde(default)]
    pub originator: String,
}
