use crate::constants::{query_param, ScanModule};
use url::Url;

/// Ordered action-specific query parameters.
///
/// Keys are emitted in insertion order after `module`, `apikey` and `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value`.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Appends `key=value` only when a value is present.
    #[must_use]
    pub fn with_optional<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds `<base>?module=<module>&apikey=<key>&action=<action>&<params>`.
///
/// Any query already present on `base` is replaced.
pub(crate) fn build_request_url(
    base: &Url,
    api_key: &str,
    module: ScanModule,
    action: &str,
    params: &QueryParams,
) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.append_pair(query_param::MODULE, module.as_str());
        pairs.append_pair(query_param::API_KEY, api_key);
        pairs.append_pair(query_param::ACTION, action);
        for (key, value) in params.iter() {
            pairs.append_pair(key, value);
        }
    }
    url
}

/// Renders `url` with the API key masked, for logs and errors.
pub(crate) fn redacted(url: &Url) -> String {
    let masked: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == query_param::API_KEY {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut clone = url.clone();
    if masked.is_empty() {
        return clone.to_string();
    }
    clone.query_pairs_mut().clear().extend_pairs(masked);
    clone.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.bscscan.com/api").unwrap()
    }

    #[test]
    fn fixed_keys_come_first() {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, "0xabc")
            .with(query_param::TAG, "pending");
        let url = build_request_url(&base(), "KEY", ScanModule::Proxy, "eth_getTransactionCount", &params);

        assert_eq!(
            url.as_str(),
            "https://api.bscscan.com/api?module=proxy&apikey=KEY&action=eth_getTransactionCount&address=0xabc&tag=pending"
        );
    }

    #[test]
    fn existing_query_is_replaced() {
        let base = Url::parse("https://api.bscscan.com/api?module=stale&foo=bar").unwrap();
        let url = build_request_url(&base, "KEY", ScanModule::Account, "balance", &QueryParams::new());
        assert_eq!(url.query(), Some("module=account&apikey=KEY&action=balance"));
    }

    #[test]
    fn values_are_form_encoded() {
        let params = QueryParams::new().with(query_param::ADDRESS, "0xa,0xb");
        let url = build_request_url(&base(), "KEY", ScanModule::Account, "balancemulti", &params);
        assert!(url.as_str().ends_with("address=0xa%2C0xb"));
    }

    #[test]
    fn optional_values_are_skipped() {
        let params = QueryParams::new()
            .with_optional(query_param::PAGE, None::<u32>)
            .with_optional(query_param::OFFSET, Some(25u32));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get(query_param::OFFSET), Some("25"));
        assert!(params.get(query_param::PAGE).is_none());
    }

    #[test]
    fn redaction_masks_only_the_key() {
        let url = build_request_url(&base(), "SECRET", ScanModule::Proxy, "eth_gasPrice", &QueryParams::new());
        let shown = redacted(&url);
        assert!(!shown.contains("SECRET"));
        assert!(shown.contains("apikey=***") || shown.contains("apikey=%2A%2A%2A"));
        assert!(shown.contains("action=eth_gasPrice"));
    }
}
