use super::{ScanClient, ScanClientHooks, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use url::Url;
use std::sync::{Arc, Mutex};

pub(crate) const TEST_BASE_URL: &str = "https://api.bscscan.com/api";
pub(crate) const TEST_API_KEY: &str = "TESTKEY";

enum Reply {
    Body(String),
    Status(u16),
}

struct Inner {
    reply: Reply,
    requests: Mutex<Vec<Url>>,
}

/// In-memory transport that answers every request the same way and keeps
/// the requested URLs.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    inner: Arc<Inner>,
}

impl RecordingTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            inner: Arc::new(Inner {
                reply,
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn responding(body: &str) -> Self {
        Self::with_reply(Reply::Body(body.to_string()))
    }

    pub(crate) fn failing_with_status(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Query string of the most recent request.
    pub(crate) fn last_query(&self) -> String {
        self.requests()
            .last()
            .and_then(|url| url.query().map(str::to_string))
            .expect("no request recorded")
    }

    pub(crate) fn client(&self) -> Arc<ScanClient> {
        self.client_with_hooks(ScanClientHooks::default())
    }

    pub(crate) fn client_with_hooks(&self, hooks: ScanClientHooks) -> Arc<ScanClient> {
        Arc::new(ScanClient::with_transport(
            Url::parse(TEST_BASE_URL).unwrap(),
            TEST_API_KEY,
            Arc::new(self.clone()),
            hooks,
        ))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        self.inner.requests.lock().unwrap().push(url.clone());
        match &self.inner.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status) => Err(TransportError::Status {
                status: *status,
                url: url.to_string(),
            }),
        }
    }
}
