//! Filter builders for list endpoints.
//!
//! Each filter collects only the arguments the caller actually supplied;
//! anything left unset is omitted from the outgoing query entirely. Cursor
//! and ordering values are passed through verbatim for the server to
//! validate.

use crate::http::Params;

/// Market listing types accepted by `/get_markets`.
const MARKET_TYPES: &[&str] = &["futures", "spot"];

/// Candlestick granularities accepted by `/candlesticks`, in minutes.
const GRANULARITIES: &[&str] = &["1", "5", "30", "60", "360", "1440"];

/// Cursor/ordering/limit paging filter shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFilter {
    /// Return entries before this opaque cursor.
    pub before_id: Option<String>,
    /// Return entries after this opaque cursor.
    pub after_id: Option<String>,
    /// Ordering key.
    pub order_by: Option<String>,
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
}

impl PageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    pub fn with_after_id(mut self, id: impl Into<String>) -> Self {
        self.after_id = Some(id.into());
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by = Some(key.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn apply(&self, params: &mut Params) {
        params.push_opt("before_id", self.before_id.as_ref());
        params.push_opt("after_id", self.after_id.as_ref());
        params.push_opt("order_by", self.order_by.as_ref());
        params.push_opt("limit", self.limit);
    }

    /// Assemble the query parameters for this filter.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        self.apply(&mut params);
        params
    }
}

/// Filter for `/get_blocks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlocksFilter {
    /// Restrict to blocks proposed by this validator address.
    pub proposer: Option<String>,
    /// Paging controls.
    pub page: PageFilter,
}

impl BlocksFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proposer(mut self, proposer: impl Into<String>) -> Self {
        self.proposer = Some(proposer.into());
        self
    }

    pub fn with_before_id(mut self, id: impl Into<String>) -> Self {
        self.page.before_id = Some(id.into());
        self
    }

    pub fn with_after_id(mut self, id: impl Into<String>) -> Self {
        self.page.after_id = Some(id.into());
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.page.order_by = Some(key.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    /// Assemble the query parameters for this filter.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("proposer", self.proposer.as_ref());
        self.page.apply(&mut params);
        params
    }
}

/// Filter for `/get_transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsFilter {
    /// Restrict to transactions involving this address.
    pub address: Option<String>,
    /// Restrict to a single message type.
    pub msg_type: Option<String>,
    /// Restrict to a single block height.
    pub height: Option<u64>,
    /// Paging controls.
    pub page: PageFilter,
}

impl TransactionsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_msg_type(mut self, msg_type: impl Into<String>) -> Self {
        self.msg_type = Some(msg_type.into());
        self
    }

    pub fn with_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_before_id(mut self, id: impl Into<String>) -> Self {
        self.page.before_id = Some(id.into());
        self
    }

    pub fn with_after_id(mut self, id: impl Into<String>) -> Self {
        self.page.after_id = Some(id.into());
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.page.order_by = Some(key.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    /// Assemble the query parameters for this filter.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("address", self.address.as_ref());
        params.push_opt("msg_type", self.msg_type.as_ref());
        params.push_opt("height", self.height);
        self.page.apply(&mut params);
        params
    }
}

/// Filter for `/get_trades`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesFilter {
    /// Restrict to a single market; lowercased on the wire.
    pub market: Option<String>,
    /// Paging controls.
    pub page: PageFilter,
}

impl TradesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_before_id(mut self, id: impl Into<String>) -> Self {
        self.page.before_id = Some(id.into());
        self
    }

    pub fn with_after_id(mut self, id: impl Into<String>) -> Self {
        self.page.after_id = Some(id.into());
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.page.order_by = Some(key.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    /// Assemble the query parameters for this filter.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_market("market", self.market.as_deref());
        self.page.apply(&mut params);
        params
    }
}

/// Filter for `/get_markets`.
///
/// `market_type` is forwarded only when it is one of the values the server
/// recognizes; anything else is dropped so the listing falls back to the
/// server default instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketsFilter {
    /// Market class: `"futures"` or `"spot"`.
    pub market_type: Option<String>,
    /// Restrict to active/inactive markets.
    pub is_active: Option<bool>,
    /// Restrict to settled/unsettled markets.
    pub is_settled: Option<bool>,
}

impl MarketsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market_type(mut self, market_type: impl Into<String>) -> Self {
        self.market_type = Some(market_type.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_settled(mut self, is_settled: bool) -> Self {
        self.is_settled = Some(is_settled);
        self
    }

    /// Assemble the query parameters for this filter.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_choice("market_type", self.market_type.as_deref(), MARKET_TYPES);
        params.push_flag("is_active", self.is_active);
        params.push_flag("is_settled", self.is_settled);
        params
    }
}

/// Request for `/candlesticks`.
///
/// The granularity is forwarded as the `resolution` parameter only when it
/// is one of the supported bucket sizes; anything else is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandlesticksRequest {
    /// Market symbol; lowercased on the wire.
    pub market: String,
    /// Bucket size in minutes: 1, 5, 30, 60, 360 or 1440.
    pub granularity: Option<String>,
    /// Start of the time range (unix seconds).
    pub from: Option<u64>,
    /// End of the time range (unix seconds).
    pub to: Option<u64>,
}

impl CandlesticksRequest {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            granularity: None,
            from: None,
            to: None,
        }
    }

    pub fn with_granularity(mut self, minutes: impl Into<String>) -> Self {
        self.granularity = Some(minutes.into());
        self
    }

    pub fn with_time_range(mut self, from: u64, to: u64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Assemble the query parameters for this request.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_market("market", Some(self.market.as_str()));
        params.push_choice("resolution", self.granularity.as_deref(), GRANULARITIES);
        params.push_opt("from", self.from);
        params.push_opt("to", self.to);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_params() {
        assert!(PageFilter::new().params().is_empty());
        assert!(BlocksFilter::new().params().is_empty());
        assert!(TransactionsFilter::new().params().is_empty());
        assert!(TradesFilter::new().params().is_empty());
        assert!(MarketsFilter::new().params().is_empty());
    }

    #[test]
    fn page_filter_passes_cursors_through() {
        let params = PageFilter::new()
            .with_before_id("100")
            .with_after_id("50")
            .with_order_by("asc")
            .with_limit(20)
            .params();
        assert_eq!(params.get("before_id"), Some("100"));
        assert_eq!(params.get("after_id"), Some("50"));
        assert_eq!(params.get("order_by"), Some("asc"));
        assert_eq!(params.get("limit"), Some("20"));
    }

    #[test]
    fn trades_filter_lowercases_market() {
        let params = TradesFilter::new().with_market("SWTH_ETH").params();
        assert_eq!(params.get("market"), Some("swth_eth"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn markets_filter_drops_unknown_type() {
        let params = MarketsFilter::new().with_market_type("invalid").params();
        assert!(params.get("market_type").is_none());

        let params = MarketsFilter::new().with_market_type("futures").params();
        assert_eq!(params.get("market_type"), Some("futures"));
    }

    #[test]
    fn markets_filter_flags() {
        let params = MarketsFilter::new().with_active(true).with_settled(false).params();
        assert_eq!(params.get("is_active"), Some("true"));
        assert_eq!(params.get("is_settled"), Some("false"));
    }

    #[test]
    fn candlesticks_drop_unknown_granularity() {
        let params = CandlesticksRequest::new("swth_eth")
            .with_granularity("7")
            .params();
        assert!(params.get("resolution").is_none());

        let params = CandlesticksRequest::new("swth_eth")
            .with_granularity("60")
            .params();
        assert_eq!(params.get("resolution"), Some("60"));
    }

    #[test]
    fn candlesticks_include_market_and_range() {
        let params = CandlesticksRequest::new("SWTH_ETH")
            .with_granularity("5")
            .with_time_range(1_600_000_000, 1_600_086_400)
            .params();
        assert_eq!(params.get("market"), Some("swth_eth"));
        assert_eq!(params.get("resolution"), Some("5"));
        assert_eq!(params.get("from"), Some("1600000000"));
        assert_eq!(params.get("to"), Some("1600086400"));
    }

    #[test]
    fn transactions_filter_includes_only_supplied_fields() {
        let params = TransactionsFilter::new()
            .with_msg_type("send_tokens")
            .with_height(1000)
            .params();
        assert_eq!(params.get("msg_type"), Some("send_tokens"));
        assert_eq!(params.get("height"), Some("1000"));
        assert!(params.get("address").is_none());
        assert_eq!(params.len(), 2);
    }
}
