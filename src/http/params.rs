//! Query-parameter assembly.

/// Ordered set of query parameters for a single request.
///
/// A parameter the caller did not supply is never pushed. The server treats
/// a missing key and an empty value differently for optional filters, so
/// absent arguments must be omitted entirely rather than sent blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push a required parameter.
    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Push an optional parameter, omitting the key when absent.
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Push an optional market symbol, lowercased.
    ///
    /// The server is case-sensitive and expects lowercase market symbols.
    pub fn push_market(&mut self, key: &'static str, market: Option<&str>) -> &mut Self {
        if let Some(market) = market {
            self.push(key, market.to_lowercase());
        }
        self
    }

    /// Push an optional flag as `true`/`false`.
    pub fn push_flag(&mut self, key: &'static str, value: Option<bool>) -> &mut Self {
        self.push_opt(key, value)
    }

    /// Push an optional value only when it is a member of `allowed`.
    ///
    /// An unrecognized value is silently dropped so the server falls back to
    /// its default filtering instead of rejecting the request.
    pub fn push_choice(
        &mut self,
        key: &'static str,
        value: Option<&str>,
        allowed: &[&str],
    ) -> &mut Self {
        if let Some(value) = value {
            if allowed.contains(&value) {
                self.push(key, value);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The assembled pairs, in push order.
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Value of the first pair with the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_are_omitted() {
        let mut params = Params::new();
        params.push_opt("limit", None::<u32>);
        params.push_market("market", None);
        params.push_flag("is_active", None);
        assert!(params.is_empty());
    }

    #[test]
    fn present_values_are_kept_in_order() {
        let mut params = Params::new();
        params.push("account", "swth1abc");
        params.push_opt("limit", Some(50));
        assert_eq!(
            params.as_slice(),
            &[
                ("account", "swth1abc".to_string()),
                ("limit", "50".to_string()),
            ]
        );
    }

    #[test]
    fn market_symbols_are_lowercased() {
        let mut params = Params::new();
        params.push_market("market", Some("SWTH_ETH"));
        assert_eq!(params.get("market"), Some("swth_eth"));
    }

    #[test]
    fn flags_render_as_booleans() {
        let mut params = Params::new();
        params.push_flag("is_active", Some(true));
        params.push_flag("is_settled", Some(false));
        assert_eq!(params.get("is_active"), Some("true"));
        assert_eq!(params.get("is_settled"), Some("false"));
    }

    #[test]
    fn choices_outside_the_allowed_set_are_dropped() {
        let mut params = Params::new();
        params.push_choice("market_type", Some("invalid"), &["futures", "spot"]);
        assert!(params.is_empty());

        params.push_choice("market_type", Some("spot"), &["futures", "spot"]);
        assert_eq!(params.get("market_type"), Some("spot"));
    }
}
