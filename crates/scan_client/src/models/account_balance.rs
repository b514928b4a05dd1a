use serde::{Deserialize, Serialize};

/// One entry of a `balancemulti` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account address
    pub account: String,

    /// Balance in wei, decimal string
    pub balance: String,
}
