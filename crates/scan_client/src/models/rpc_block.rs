use super::RpcTransaction;
use serde::{Deserialize, Serialize};

/// Block object returned by `eth_getBlockByNumber`.
///
/// The client always asks for full transaction objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<String>,

    pub difficulty: String,

    pub extra_data: String,

    pub gas_limit: String,

    pub gas_used: String,

    pub hash: String,

    pub logs_bloom: String,

    pub miner: String,

    pub mix_hash: String,

    pub nonce: String,

    pub number: String,

    pub parent_hash: String,

    pub receipts_root: String,

    pub sha3_uncles: String,

    pub size: String,

    pub state_root: String,

    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<String>,

    pub transactions: Vec<RpcTransaction>,

    pub transactions_root: String,

    #[serde(default)]
    pub uncles: Vec<String>,
}
