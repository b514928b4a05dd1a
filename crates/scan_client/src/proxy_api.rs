use crate::constants::{proxy_action, query_param, ScanModule};
use crate::error::ScanResult;
use crate::models::{
    BlockByNumber, BlockTag, BlockTransactionCountByNumber, EthBlockNumber, EthCall, EthCode,
    EthEstimateGas, EthEstimateGasRequest, EthGasPrice, EthStorageAt, SendRawTransaction,
    TransactionByBlockNumberAndIndex, TransactionByHash, TransactionCount, TransactionReceipt,
};
use crate::scan_client::{QueryParams, ScanClient};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Geth proxy module
///
/// Ethereum-compatible JSON-RPC methods served through the explorer. Every
/// method returns `Ok(None)` when the explorer answers without a result.
/// Identifiers are passed through unvalidated.
#[derive(Debug, Clone)]
pub struct GethProxyApi {
    /// The explorer client instance
    client: Arc<ScanClient>,
}

impl GethProxyApi {
    #[must_use]
    pub const fn new(client: Arc<ScanClient>) -> Self {
        Self { client }
    }

    async fn send<T: DeserializeOwned>(&self, action: &str, params: QueryParams) -> ScanResult<Option<T>> {
        self.client.get(ScanModule::Proxy, action, params).await
    }

    /// eth_blockNumber
    ///
    /// Returns the number of most recent block.
    pub async fn eth_block_number(&self) -> ScanResult<Option<EthBlockNumber>> {
        self.send(proxy_action::ETH_BLOCK_NUMBER, QueryParams::new())
            .await
    }

    /// eth_getBlockByNumber
    ///
    /// `tag` is the block number in hex, e.g. `0xC36B3C`. Full transaction
    /// objects are always requested.
    pub async fn eth_get_block_by_number(&self, tag: &str) -> ScanResult<Option<BlockByNumber>> {
        let params = QueryParams::new()
            .with(query_param::TAG, tag)
            .with(query_param::BOOLEAN, true);
        self.send(proxy_action::ETH_GET_BLOCK_BY_NUMBER, params).await
    }

    /// eth_getBlockTransactionCountByNumber
    ///
    /// Returns the number of transactions in the block `tag` (hex, e.g. `0x10FB78`).
    pub async fn eth_get_block_transaction_count_by_number(
        &self,
        tag: &str,
    ) -> ScanResult<Option<BlockTransactionCountByNumber>> {
        let params = QueryParams::new().with(query_param::TAG, tag);
        self.send(proxy_action::ETH_GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, params)
            .await
    }

    /// eth_getTransactionByHash
    pub async fn eth_get_transaction_by_hash(
        &self,
        txhash: &str,
    ) -> ScanResult<Option<TransactionByHash>> {
        let params = QueryParams::new().with(query_param::TX_HASH, txhash);
        self.send(proxy_action::ETH_GET_TRANSACTION_BY_HASH, params)
            .await
    }

    /// eth_getTransactionByBlockNumberAndIndex
    ///
    /// `tag` is the block number and `index` the position in the block, both hex.
    pub async fn eth_get_transaction_by_block_number_and_index(
        &self,
        tag: &str,
        index: &str,
    ) -> ScanResult<Option<TransactionByBlockNumberAndIndex>> {
        let params = QueryParams::new()
            .with(query_param::TAG, tag)
            .with(query_param::INDEX, index);
        self.send(proxy_action::ETH_GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX, params)
            .await
    }

    /// eth_getTransactionCount
    ///
    /// Returns the number of transactions sent from `address`. `tag` defaults
    /// to `latest`.
    pub async fn eth_get_transaction_count(
        &self,
        address: &str,
        tag: Option<BlockTag>,
    ) -> ScanResult<Option<TransactionCount>> {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, address)
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(proxy_action::ETH_GET_TRANSACTION_COUNT, params)
            .await
    }

    /// eth_sendRawTransaction
    ///
    /// Submits the pre-signed transaction `hex` for broadcast.
    pub async fn eth_send_raw_transaction(
        &self,
        hex: &str,
    ) -> ScanResult<Option<SendRawTransaction>> {
        let params = QueryParams::new().with(query_param::HEX, hex);
        self.send(proxy_action::ETH_SEND_RAW_TRANSACTION, params)
            .await
    }

    /// eth_getTransactionReceipt
    pub async fn eth_get_transaction_receipt(
        &self,
        txhash: &str,
    ) -> ScanResult<Option<TransactionReceipt>> {
        let params = QueryParams::new().with(query_param::TX_HASH, txhash);
        self.send(proxy_action::ETH_GET_TRANSACTION_RECEIPT, params)
            .await
    }

    /// eth_call
    ///
    /// Executes a message call against `to` without creating a transaction.
    /// `data` is the method signature hash and encoded parameters.
    pub async fn eth_call(
        &self,
        to: &str,
        data: &str,
        tag: Option<BlockTag>,
    ) -> ScanResult<Option<EthCall>> {
        let params = QueryParams::new()
            .with(query_param::TO, to)
            .with(query_param::DATA, data)
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(proxy_action::ETH_CALL, params).await
    }

    /// eth_getCode
    pub async fn eth_get_code(
        &self,
        address: &str,
        tag: Option<BlockTag>,
    ) -> ScanResult<Option<EthCode>> {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, address)
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(proxy_action::ETH_GET_CODE, params).await
    }

    /// eth_getStorageAt
    ///
    /// Value at storage `position` (hex, e.g. `0x0`) of `address`. The
    /// explorer marks this endpoint experimental.
    pub async fn eth_get_storage_at(
        &self,
        address: &str,
        position: &str,
        tag: Option<BlockTag>,
    ) -> ScanResult<Option<EthStorageAt>> {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, address)
            .with(query_param::POSITION, position)
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(proxy_action::ETH_GET_STORAGE_AT, params).await
    }

    /// eth_gasPrice
    ///
    /// Returns the current price per gas in wei.
    pub async fn eth_gas_price(&self) -> ScanResult<Option<EthGasPrice>> {
        self.send(proxy_action::ETH_GAS_PRICE, QueryParams::new())
            .await
    }

    /// eth_estimateGas
    pub async fn eth_estimate_gas(
        &self,
        request: &EthEstimateGasRequest,
    ) -> ScanResult<Option<EthEstimateGas>> {
        self.send(proxy_action::ETH_ESTIMATE_GAS, request.to_params())
            .await
    }
}
