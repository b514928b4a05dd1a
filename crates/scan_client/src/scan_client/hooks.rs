use crate::constants::ScanModule;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Summary of one explorer call, handed to request observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub module: ScanModule,
    pub action: String,
    pub elapsed: Duration,
    /// `false` when the call returned an error
    pub success: bool,
    /// HTTP status of a transport status failure
    pub status: Option<u16>,
}

type RequestObserver = Arc<dyn Fn(&RequestOutcome) + Send + Sync>;

/// Optional callbacks invoked around explorer calls.
#[derive(Clone, Default)]
pub struct ScanClientHooks {
    on_request: Option<RequestObserver>,
}

impl ScanClientHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback run after every call, successful or not.
    #[must_use]
    pub fn with_request_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&RequestOutcome) + Send + Sync + 'static,
    {
        self.on_request = Some(Arc::new(observer));
        self
    }

    pub(crate) fn notify(&self, outcome: RequestOutcome) {
        if let Some(observer) = &self.on_request {
            observer(&outcome);
        }
    }
}

impl fmt::Debug for ScanClientHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanClientHooks")
            .field("on_request", &self.on_request.is_some())
            .finish()
    }
}
