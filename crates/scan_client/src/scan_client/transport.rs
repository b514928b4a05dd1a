use super::query::redacted;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// HTTP GET collaborator used by [`super::ScanClient`].
///
/// Implementations return the response body of a successful request and map
/// every other outcome to a [`TransportError`]. Connection pooling, TLS and
/// timeouts are the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<String, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        // reqwest errors embed the request URL, which carries the API key
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: redacted(&url),
            });
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))
    }
}
