use crate::constants::{contract_action, query_param, ScanModule};
use crate::error::ScanResult;
use crate::models::{ContractAbi, ContractSourceCode};
use crate::scan_client::{QueryParams, ScanClient};
use std::sync::Arc;

/// Contract module: verified ABI and source code.
#[derive(Debug, Clone)]
pub struct ContractApi {
    client: Arc<ScanClient>,
}

impl ContractApi {
    #[must_use]
    pub const fn new(client: Arc<ScanClient>) -> Self {
        Self { client }
    }

    /// ABI of a verified contract, as a JSON string.
    pub async fn abi(&self, address: &str) -> ScanResult<Option<ContractAbi>> {
        let params = QueryParams::new().with(query_param::ADDRESS, address);
        self.client
            .get(ScanModule::Contract, contract_action::GET_ABI, params)
            .await
    }

    /// Source code and compiler metadata of a verified contract.
    pub async fn source_code(&self, address: &str) -> ScanResult<Option<ContractSourceCode>> {
        let params = QueryParams::new().with(query_param::ADDRESS, address);
        self.client
            .get(ScanModule::Contract, contract_action::GET_SOURCE_CODE, params)
            .await
    }
}
