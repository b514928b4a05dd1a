use crate::constants::{account_action, query_param, ScanModule};
use crate::error::ScanResult;
use crate::models::{
    Balance, BalanceMulti, BlockTag, InternalTransactions, NftTransfers, NormalTransactions,
    TokenTransferRequest, TokenTransfers, TransactionListRequest,
};
use crate::scan_client::{QueryParams, ScanClient};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Account module: balances, transaction lists and token transfer events.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: Arc<ScanClient>,
}

impl AccountApi {
    #[must_use]
    pub const fn new(client: Arc<ScanClient>) -> Self {
        Self { client }
    }

    async fn send<T: DeserializeOwned>(&self, action: &str, params: QueryParams) -> ScanResult<Option<T>> {
        self.client.get(ScanModule::Account, action, params).await
    }

    /// Native balance of `address` in wei. `tag` defaults to `latest`.
    pub async fn balance(&self, address: &str, tag: Option<BlockTag>) -> ScanResult<Option<Balance>> {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, address)
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(account_action::BALANCE, params).await
    }

    /// Native balances of several addresses in one call.
    ///
    /// The explorer caps the list at 20 addresses; longer lists are sent
    /// as-is and rejected upstream.
    pub async fn balance_multi(
        &self,
        addresses: &[&str],
        tag: Option<BlockTag>,
    ) -> ScanResult<Option<BalanceMulti>> {
        let params = QueryParams::new()
            .with(query_param::ADDRESS, addresses.join(","))
            .with(query_param::TAG, tag.unwrap_or_default());
        self.send(account_action::BALANCE_MULTI, params).await
    }

    /// Normal transactions of an address (`txlist`).
    pub async fn transactions(
        &self,
        request: &TransactionListRequest,
    ) -> ScanResult<Option<NormalTransactions>> {
        self.send(account_action::TRANSACTION_LIST, request.to_params())
            .await
    }

    /// Internal transactions of an address (`txlistinternal`).
    pub async fn internal_transactions(
        &self,
        request: &TransactionListRequest,
    ) -> ScanResult<Option<InternalTransactions>> {
        self.send(account_action::TRANSACTION_LIST_INTERNAL, request.to_params())
            .await
    }

    /// Internal transactions spawned by one transaction (`txlistinternal`).
    pub async fn internal_transactions_by_hash(
        &self,
        txhash: &str,
    ) -> ScanResult<Option<InternalTransactions>> {
        let params = QueryParams::new().with(query_param::TX_HASH, txhash);
        self.send(account_action::TRANSACTION_LIST_INTERNAL, params)
            .await
    }

    /// BEP-20 transfer events (`tokentx`).
    pub async fn token_transfers(
        &self,
        request: &TokenTransferRequest,
    ) -> ScanResult<Option<TokenTransfers>> {
        self.send(account_action::TOKEN_TX, request.to_params())
            .await
    }

    /// BEP-721 transfer events (`tokennfttx`).
    pub async fn nft_transfers(
        &self,
        request: &TokenTransferRequest,
    ) -> ScanResult<Option<NftTransfers>> {
        self.send(account_action::TOKEN_NFT_TX, request.to_params())
            .await
    }
}
