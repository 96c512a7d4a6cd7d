//! Transaction-fee schedule types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single fee entry from `/get_txns_fees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxnFee {
    /// Message type the fee applies to (e.g. `"send_tokens"`).
    pub msg_type: String,
    /// Fee amount, as a decimal string.
    pub fee: String,
}

/// Fold raw fee entries into a `msg_type → fee` map.
///
/// Duplicate message types keep the last entry seen.
pub fn fee_schedule(entries: Vec<TxnFee>) -> HashMap<String, String> {
    entries.into_iter().map(|e| (e.msg_type, e.fee)).collect()
}
