use serde::{Deserialize, Serialize};

/// Transaction object returned by the proxy module.
///
/// Quantities are kept in their hex string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    /// Hash of the containing block, `None` while pending
    pub block_hash: Option<String>,

    /// Number of the containing block, `None` while pending
    pub block_number: Option<String>,

    pub from: String,

    pub gas: String,

    pub gas_price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,

    pub hash: String,

    pub input: String,

    pub nonce: String,

    /// Recipient, `None` for contract creation
    pub to: Option<String>,

    pub transaction_index: Option<String>,

    pub value: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,

    pub v: String,

    pub r: String,

    pub s: String,
}
