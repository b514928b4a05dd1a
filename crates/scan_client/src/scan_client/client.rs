use super::query::{build_request_url, redacted};
use super::{QueryParams, RequestOutcome, ScanClient, ScanClientBuilder, ScanClientHooks, Transport};
use crate::account_api::AccountApi;
use crate::constants::ScanModule;
use crate::contract_api::ContractApi;
use crate::error::{ScanError, ScanResult};
use crate::proxy_api::GethProxyApi;
use crate::settings::ClientSettings;
use crate::transaction_api::TransactionApi;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

impl ScanClient {
    /// Creates a configurable builder for the client.
    #[must_use]
    pub fn builder() -> ScanClientBuilder {
        ScanClientBuilder::new()
    }

    /// Mainnet client with the default `reqwest` transport.
    pub fn new(api_key: impl Into<String>) -> ScanResult<Self> {
        ScanClientBuilder::new().api_key(api_key).build()
    }

    /// Client configured from loaded settings.
    pub fn from_settings(settings: &ClientSettings) -> ScanResult<Self> {
        ScanClientBuilder::from_settings(settings)?.build()
    }

    /// Creates a client over an already constructed transport.
    #[must_use]
    pub fn with_transport(
        base_address: Url,
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
        hooks: ScanClientHooks,
    ) -> Self {
        Self {
            base_address,
            api_key: api_key.into(),
            transport,
            hooks,
        }
    }

    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Handle for the `proxy` module.
    #[must_use]
    pub fn proxy(self: &Arc<Self>) -> GethProxyApi {
        GethProxyApi::new(Arc::clone(self))
    }

    /// Handle for the `account` module.
    #[must_use]
    pub fn accounts(self: &Arc<Self>) -> AccountApi {
        AccountApi::new(Arc::clone(self))
    }

    /// Handle for the `contract` module.
    #[must_use]
    pub fn contracts(self: &Arc<Self>) -> ContractApi {
        ContractApi::new(Arc::clone(self))
    }

    /// Handle for the `transaction` module.
    #[must_use]
    pub fn transactions(self: &Arc<Self>) -> TransactionApi {
        TransactionApi::new(Arc::clone(self))
    }

    /// Full request URL for an action, API key included.
    #[must_use]
    pub fn request_url(&self, module: ScanModule, action: &str, params: &QueryParams) -> Url {
        build_request_url(&self.base_address, &self.api_key, module, action, params)
    }

    /// Issues one GET for `module`/`action` and parses the body.
    ///
    /// Returns `Ok(None)` when the explorer sent no usable `result`.
    pub async fn get<T>(
        &self,
        module: ScanModule,
        action: &str,
        params: QueryParams,
    ) -> ScanResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(module, action, &params);
        let start = Instant::now();
        debug!(%module, action, url = %redacted(&url), "sending explorer request");

        let result: ScanResult<Option<T>> = async {
            let body = self.transport.get(url).await?;
            Self::parse_body::<T>(module, action, &body)
        }
        .await;

        let elapsed = start.elapsed();
        let status = match &result {
            Err(ScanError::Transport(err)) => err.status(),
            _ => None,
        };
        match &result {
            Ok(found) => debug!(
                %module,
                action,
                elapsed_ms = elapsed.as_millis() as u64,
                empty = found.is_none(),
                "explorer request completed"
            ),
            Err(err) => warn!(
                %module,
                action,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %err,
                "explorer request failed"
            ),
        }
        self.hooks.notify(RequestOutcome {
            module,
            action: action.to_string(),
            elapsed,
            success: result.is_ok(),
            status,
        });

        result
    }

    /// Parses a response body into `T`.
    ///
    /// An empty body, a JSON `null`, or an envelope whose `result` is missing,
    /// `null` or `""` yields `Ok(None)`. Anything that is not JSON or does not
    /// match `T` is a deserialization failure.
    pub(crate) fn parse_body<T>(module: ScanModule, action: &str, body: &str) -> ScanResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(trimmed)?;
        log_upstream_error(module, action, &value);

        if !has_result(&value) {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(ScanError::from)
    }
}

fn has_result(value: &Value) -> bool {
    match value.get("result") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// In-band failures are passed through untouched, only logged.
fn log_upstream_error(module: ScanModule, action: &str, value: &Value) {
    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_i64);
        let upstream_message = error.get("message").and_then(Value::as_str).unwrap_or("");
        warn!(%module, action, ?code, upstream_message, "explorer returned a JSON-RPC error");
    } else if value.get("status").and_then(Value::as_str) == Some("0") {
        let upstream_message = value.get("message").and_then(Value::as_str).unwrap_or("");
        let detail = value.get("result").and_then(Value::as_str).unwrap_or("");
        warn!(%module, action, upstream_message, detail, "explorer reported status 0");
    }
}
