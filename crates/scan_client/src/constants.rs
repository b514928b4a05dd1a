//! Module and action tables of the explorer API.

use std::fmt;

/// Top-level grouping of explorer actions, sent as the `module` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanModule {
    Account,
    Contract,
    Transaction,
    /// Ethereum-compatible JSON-RPC passthrough.
    Proxy,
}

impl ScanModule {
    /// Wire name of the module.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScanModule::Account => "account",
            ScanModule::Contract => "contract",
            ScanModule::Transaction => "transaction",
            ScanModule::Proxy => "proxy",
        }
    }
}

impl fmt::Display for ScanModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions of the `account` module.
pub mod account_action {
    pub const BALANCE: &str = "balance";
    pub const BALANCE_MULTI: &str = "balancemulti";
    pub const TRANSACTION_LIST: &str = "txlist";
    pub const TRANSACTION_LIST_INTERNAL: &str = "txlistinternal";
    pub const TOKEN_TX: &str = "tokentx";
    pub const TOKEN_NFT_TX: &str = "tokennfttx";
}

/// Actions of the `contract` module.
pub mod contract_action {
    pub const GET_ABI: &str = "getabi";
    pub const GET_SOURCE_CODE: &str = "getsourcecode";
}

/// Actions of the `transaction` module.
pub mod transaction_action {
    pub const GET_TX_RECEIPT_STATUS: &str = "gettxreceiptstatus";
}

/// Actions of the `proxy` module, named after the JSON-RPC methods they mirror.
pub mod proxy_action {
    pub const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
    pub const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
    pub const ETH_GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER: &str =
        "eth_getBlockTransactionCountByNumber";
    pub const ETH_GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
    pub const ETH_GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX: &str =
        "eth_getTransactionByBlockNumberAndIndex";
    pub const ETH_GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
    pub const ETH_SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";
    pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
    pub const ETH_CALL: &str = "eth_call";
    pub const ETH_GET_CODE: &str = "eth_getCode";
    pub const ETH_GET_STORAGE_AT: &str = "eth_getStorageAt";
    pub const ETH_GAS_PRICE: &str = "eth_gasPrice";
    pub const ETH_ESTIMATE_GAS: &str = "eth_estimateGas";
}

/// Query parameter names.
pub mod query_param {
    pub const MODULE: &str = "module";
    pub const API_KEY: &str = "apikey";
    pub const ACTION: &str = "action";

    pub const ADDRESS: &str = "address";
    pub const CONTRACT_ADDRESS: &str = "contractaddress";
    pub const TAG: &str = "tag";
    pub const TX_HASH: &str = "txhash";
    pub const POSITION: &str = "position";
    pub const DATA: &str = "data";
    pub const TO: &str = "to";
    pub const INDEX: &str = "index";
    pub const HEX: &str = "hex";
    pub const BOOLEAN: &str = "boolean";
    pub const VALUE: &str = "value";
    pub const GAS: &str = "gas";
    pub const GAS_PRICE: &str = "gasPrice";

    pub const START_BLOCK: &str = "startblock";
    pub const END_BLOCK: &str = "endblock";
    pub const PAGE: &str = "page";
    pub const OFFSET: &str = "offset";
    pub const SORT: &str = "sort";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_wire_names() {
        assert_eq!(ScanModule::Account.to_string(), "account");
        assert_eq!(ScanModule::Contract.to_string(), "contract");
        assert_eq!(ScanModule::Transaction.to_string(), "transaction");
        assert_eq!(ScanModule::Proxy.as_str(), "proxy");
    }
}
