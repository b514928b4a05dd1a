//! Explorer client core: query building, transport and response parsing.

mod builder;
mod client;
mod hooks;
mod query;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::ScanClientBuilder;
pub use hooks::{RequestOutcome, ScanClientHooks};
pub use query::QueryParams;
pub use transport::{ReqwestTransport, Transport};

use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default request timeout applied to the built-in transport.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the explorer HTTP API.
///
/// Holds the base URL, the API key and the injected transport. Wrap it in an
/// [`Arc`] and hand it to the per-module handles ([`crate::GethProxyApi`],
/// [`crate::AccountApi`], ...).
pub struct ScanClient {
    base_address: Url,
    api_key: String,
    transport: Arc<dyn Transport>,
    hooks: ScanClientHooks,
}

impl std::fmt::Debug for ScanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanClient")
            .field("base_address", &self.base_address.as_str())
            .field("api_key", &"***")
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
