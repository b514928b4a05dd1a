use serde::{Deserialize, Serialize};

/// Result of `gettxreceiptstatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptStatusResult {
    /// `"1"` for success, `"0"` for failure, empty for pre-Byzantium
    pub status: String,
}
