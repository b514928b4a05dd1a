use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC envelope returned by the proxy module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyResponse<T> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Request ID, echoed by the explorer
    pub id: Value,

    /// Typed payload
    pub result: T,

    /// Error if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProxyResponseError>,
}

impl ProxyResponse<String> {
    /// Decodes a hex quantity result such as `"0x1b4"`.
    ///
    /// Returns `None` when the payload is not a `0x`-prefixed number that
    /// fits in 128 bits.
    #[must_use]
    pub fn quantity(&self) -> Option<u128> {
        let digits = self.result.strip_prefix("0x")?;
        if digits.is_empty() {
            return Some(0);
        }
        u128::from_str_radix(digits, 16).ok()
    }
}

/// JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyResponseError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope_and_quantity() {
        let json = r#"{"jsonrpc":"2.0","id":83,"result":"0x2ce6c1a"}"#;
        let parsed: ProxyResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.json_rpc, "2.0");
        assert_eq!(parsed.id, Value::from(83));
        assert_eq!(parsed.result, "0x2ce6c1a");
        assert!(parsed.error.is_none());
        assert_eq!(parsed.quantity(), Some(0x2ce6c1a));
    }

    #[test]
    fn quantity_rejects_non_hex() {
        let response = ProxyResponse {
            json_rpc: "2.0".to_string(),
            id: Value::from(1),
            result: "pending".to_string(),
            error: None,
        };
        assert_eq!(response.quantity(), None);
    }
}
