use serde::{Deserialize, Serialize};

/// Verified source entry of a `getsourcecode` result.
///
/// Unverified contracts come back with empty strings rather than missing
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractSource {
    pub source_code: String,
    #[serde(rename = "ABI")]
    pub abi: String,
    pub contract_name: String,
    pub compiler_version: String,
    pub optimization_used: String,
    pub runs: String,
    pub constructor_arguments: String,
    #[serde(rename = "EVMVersion")]
    pub evm_version: String,
    pub library: String,
    pub license_type: String,
    /// `"1"` when the contract is a proxy
    pub proxy: String,
    pub implementation: String,
    pub swarm_source: String,
}
