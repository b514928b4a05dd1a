use serde::{Deserialize, Serialize};

/// Envelope returned by the account, contract and transaction modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerResponse<T> {
    /// `"1"` on success, `"0"` otherwise
    pub status: String,

    /// `"OK"`, `"NOTOK"` or a short explanation
    pub message: String,

    /// Typed payload
    pub result: T,
}

impl<T> ExplorerResponse<T> {
    /// Whether the explorer flagged the call as successful.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "1"
    }
}
