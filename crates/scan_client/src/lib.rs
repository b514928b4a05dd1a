//! BscScan explorer API client
//!
//! Typed bindings for the BscScan (and any Etherscan-compatible explorer)
//! HTTP API. Every endpoint builds a `?module=..&apikey=..&action=..` query,
//! issues a single GET through an injected [`Transport`] and deserializes the
//! JSON body into a response model.
//!
//! ```rust,ignore
//! use bscscan_client::{BlockTag, ScanClient};
//! use std::sync::Arc;
//!
//! let client = Arc::new(ScanClient::builder().api_key("KEY").build()?);
//! let nonce = client
//!     .proxy()
//!     .eth_get_transaction_count("0xabc", Some(BlockTag::Pending))
//!     .await?;
//! ```

mod account_api;
pub mod constants;
mod contract_api;
mod error;
pub mod models;
mod proxy_api;
mod scan_client;
mod settings;
mod transaction_api;

pub use account_api::AccountApi;
pub use constants::ScanModule;
pub use contract_api::ContractApi;
pub use error::{ScanError, ScanResult, TransportError};
pub use proxy_api::GethProxyApi;
pub use scan_client::{
    QueryParams, ReqwestTransport, RequestOutcome, ScanClient, ScanClientBuilder,
    ScanClientHooks, Transport,
};
pub use settings::{ClientSettings, Network};
pub use transaction_api::TransactionApi;

// Re-export commonly used types
pub use models::{BlockTag, EthEstimateGasRequest, ExplorerResponse, ProxyResponse, Sort};
