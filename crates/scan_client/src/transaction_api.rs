use crate::constants::{query_param, transaction_action, ScanModule};
use crate::error::ScanResult;
use crate::models::TransactionReceiptStatus;
use crate::scan_client::{QueryParams, ScanClient};
use std::sync::Arc;

/// Transaction module.
#[derive(Debug, Clone)]
pub struct TransactionApi {
    client: Arc<ScanClient>,
}

impl TransactionApi {
    #[must_use]
    pub const fn new(client: Arc<ScanClient>) -> Self {
        Self { client }
    }

    /// Execution status of a transaction receipt (`gettxreceiptstatus`).
    pub async fn receipt_status(
        &self,
        txhash: &str,
    ) -> ScanResult<Option<TransactionReceiptStatus>> {
        let params = QueryParams::new().with(query_param::TX_HASH, txhash);
        self.client
            .get(
                ScanModule::Transaction,
                transaction_action::GET_TX_RECEIPT_STATUS,
                params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_client::test_support::RecordingTransport;

    #[tokio::test]
    async fn receipt_status_round_trip() {
        let transport =
            RecordingTransport::responding(r#"{"status":"1","message":"OK","result":{"status":"1"}}"#);
        let status = TransactionApi::new(transport.client())
            .receipt_status("0xe9975702518c79caf81d5da65dea689dcac701fcdd063f848d4f03c85392fd00")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(status.result.status, "1");
        assert_eq!(
            transport.last_query(),
            "module=transaction&apikey=TESTKEY&action=gettxreceiptstatus\
             &txhash=0xe9975702518c79caf81d5da65dea689dcac701fcdd063f848d4f03c85392fd00"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_failure() {
        let transport = RecordingTransport::failing_with_status(429);
        let err = TransactionApi::new(transport.client())
            .receipt_status("0x1")
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
