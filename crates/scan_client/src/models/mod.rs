//! Request parameters and response models.
//!
//! Response models mirror the upstream JSON field-for-field. Proxy endpoints
//! share the JSON-RPC envelope ([`ProxyResponse`]); the account, contract and
//! transaction modules share the explorer envelope ([`ExplorerResponse`]).
//! Every endpoint gets its own named record type over those envelopes.

mod account_balance;
mod block_tag;
mod contract_source;
mod estimate_gas_request;
mod explorer_response;
mod internal_transaction;
mod normal_transaction;
mod pagination;
mod proxy_response;
mod receipt_status;
mod rpc_block;
mod rpc_log;
mod rpc_transaction;
mod rpc_transaction_receipt;
mod sort;
mod token_transfer;

pub use account_balance::AccountBalance;
pub use block_tag::BlockTag;
pub use contract_source::ContractSource;
pub use estimate_gas_request::EthEstimateGasRequest;
pub use explorer_response::ExplorerResponse;
pub use internal_transaction::InternalTransaction;
pub use normal_transaction::NormalTransaction;
pub use pagination::{Pagination, TokenTransferRequest, TransactionListRequest};
pub use proxy_response::{ProxyResponse, ProxyResponseError};
pub use receipt_status::ReceiptStatusResult;
pub use rpc_block::RpcBlock;
pub use rpc_log::RpcLog;
pub use rpc_transaction::RpcTransaction;
pub use rpc_transaction_receipt::RpcTransactionReceipt;
pub use sort::Sort;
pub use token_transfer::{NftTransfer, TokenTransfer};

// Proxy module records

/// `eth_blockNumber`: number of the most recent block, hex encoded.
pub type EthBlockNumber = ProxyResponse<String>;
/// `eth_getBlockByNumber`.
pub type BlockByNumber = ProxyResponse<RpcBlock>;
/// `eth_getBlockTransactionCountByNumber`: transaction count, hex encoded.
pub type BlockTransactionCountByNumber = ProxyResponse<String>;
/// `eth_getTransactionByHash`.
pub type TransactionByHash = ProxyResponse<RpcTransaction>;
/// `eth_getTransactionByBlockNumberAndIndex`.
pub type TransactionByBlockNumberAndIndex = ProxyResponse<RpcTransaction>;
/// `eth_getTransactionCount`: nonce of the address, hex encoded.
pub type TransactionCount = ProxyResponse<String>;
/// `eth_sendRawTransaction`: hash of the broadcast transaction.
pub type SendRawTransaction = ProxyResponse<String>;
/// `eth_getTransactionReceipt`.
pub type TransactionReceipt = ProxyResponse<RpcTransactionReceipt>;
/// `eth_call`: raw return data.
pub type EthCall = ProxyResponse<String>;
/// `eth_getCode`: deployed bytecode.
pub type EthCode = ProxyResponse<String>;
/// `eth_getStorageAt`: 32-byte storage word.
pub type EthStorageAt = ProxyResponse<String>;
/// `eth_gasPrice`: price per gas in wei, hex encoded.
pub type EthGasPrice = ProxyResponse<String>;
/// `eth_estimateGas`: estimated gas, hex encoded.
pub type EthEstimateGas = ProxyResponse<String>;

// Account module records

/// `balance`: balance in wei as a decimal string.
pub type Balance = ExplorerResponse<String>;
/// `balancemulti`.
pub type BalanceMulti = ExplorerResponse<Vec<AccountBalance>>;
/// `txlist`.
pub type NormalTransactions = ExplorerResponse<Vec<NormalTransaction>>;
/// `txlistinternal`.
pub type InternalTransactions = ExplorerResponse<Vec<InternalTransaction>>;
/// `tokentx`.
pub type TokenTransfers = ExplorerResponse<Vec<TokenTransfer>>;
/// `tokennfttx`.
pub type NftTransfers = ExplorerResponse<Vec<NftTransfer>>;

// Contract module records

/// `getabi`: contract ABI as a JSON string.
pub type ContractAbi = ExplorerResponse<String>;
/// `getsourcecode`.
pub type ContractSourceCode = ExplorerResponse<Vec<ContractSource>>;

// Transaction module records

/// `gettxreceiptstatus`.
pub type TransactionReceiptStatus = ExplorerResponse<ReceiptStatusResult>;
