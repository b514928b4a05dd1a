use super::{ReqwestTransport, ScanClient, ScanClientHooks, Transport, DEFAULT_HTTP_TIMEOUT};
use crate::error::{ScanError, ScanResult};
use crate::settings::{ClientSettings, Network};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Configurable builder for [`ScanClient`].
///
/// The API key is the only required input. Without an explicit transport or
/// `reqwest` client the builder creates one with the configured timeout and
/// user agent.
#[derive(Default)]
pub struct ScanClientBuilder {
    api_key: Option<String>,
    network: Network,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<Client>,
    transport: Option<Arc<dyn Transport>>,
    hooks: ScanClientHooks,
}

impl ScanClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from loaded settings.
    pub fn from_settings(settings: &ClientSettings) -> ScanResult<Self> {
        let mut builder = Self::new()
            .network(settings.network)
            .base_url(settings.resolved_base_url()?)
            .timeout(settings.timeout());
        if let Some(api_key) = &settings.api_key {
            builder = builder.api_key(api_key.clone());
        }
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        Ok(builder)
    }

    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Selects a public endpoint. Ignored when a base URL is set.
    #[must_use]
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Reuses an existing `reqwest` client. Timeout and user agent settings
    /// are then the caller's responsibility.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Injects a custom transport; takes precedence over `http_client`.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: ScanClientHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> ScanResult<ScanClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ScanError::configuration("An explorer API key is required"))?;

        let base_address = match self.base_url {
            Some(url) => url,
            None => Url::parse(self.network.base_url()).map_err(|e| {
                ScanError::configuration(format!("Invalid base URL for {}: {e}", self.network))
            })?,
        };
        if base_address.cannot_be_a_base() {
            return Err(ScanError::configuration(format!(
                "Base URL {base_address} cannot carry a query"
            )));
        }

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let mut builder =
                    Client::builder().timeout(self.timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT));
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder.build().map_err(|e| {
                    ScanError::configuration(format!("Failed to build HTTP client: {e}"))
                })?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(ScanClient::with_transport(
            base_address,
            api_key,
            transport,
            self.hooks,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_required() {
        let err = ScanClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ScanError::Configuration { .. }));

        let err = ScanClientBuilder::new().api_key("  ").build().unwrap_err();
        assert!(matches!(err, ScanError::Configuration { .. }));
    }

    #[test]
    fn network_selects_endpoint() {
        let client = ScanClientBuilder::new()
            .api_key("KEY")
            .network(Network::BscTestnet)
            .build()
            .unwrap();
        assert_eq!(
            client.base_address().as_str(),
            "https://api-testnet.bscscan.com/api"
        );
    }

    #[test]
    fn explicit_base_url_wins_over_network() {
        let url = Url::parse("http://127.0.0.1:9000/api").unwrap();
        let client = ScanClientBuilder::new()
            .api_key("KEY")
            .network(Network::BscTestnet)
            .base_url(url.clone())
            .build()
            .unwrap();
        assert_eq!(client.base_address(), &url);
    }

    #[test]
    fn rejects_non_hierarchical_base_url() {
        let err = ScanClientBuilder::new()
            .api_key("KEY")
            .base_url(Url::parse("mailto:ops@example.com").unwrap())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot carry a query"));
    }

    #[test]
    fn settings_feed_the_builder() {
        let settings = ClientSettings::from_toml_str(
            r#"
            api_key = "FROMTOML"
            base_url = "http://localhost:4000/api"
            user_agent = "scanner/1.0"
            "#,
        )
        .unwrap();
        let client = ScanClientBuilder::from_settings(&settings)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.base_address().as_str(), "http://localhost:4000/api");
        assert!(!format!("{client:?}").contains("FROMTOML"));
    }
}
