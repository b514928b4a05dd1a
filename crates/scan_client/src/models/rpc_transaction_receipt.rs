use super::RpcLog;
use serde::{Deserialize, Serialize};

/// Receipt of a validated transaction, returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionReceipt {
    pub block_hash: String,

    pub block_number: String,

    /// Address of the created contract, if any
    pub contract_address: Option<String>,

    pub cumulative_gas_used: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<String>,

    pub from: String,

    pub gas_used: String,

    pub logs: Vec<RpcLog>,

    pub logs_bloom: String,

    /// `0x1` on success, `0x0` on revert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    pub to: Option<String>,

    pub transaction_hash: String,

    pub transaction_index: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<String>,
}

impl RpcTransactionReceipt {
    /// `Some(true)` when the receipt reports success, `None` for
    /// pre-Byzantium receipts without a status field.
    #[must_use]
    pub fn succeeded(&self) -> Option<bool> {
        self.status.as_deref().map(|status| status == "0x1")
    }
}
