//! Error types for explorer API calls.

use thiserror::Error;

/// Errors raised while talking to the explorer.
///
/// A call can only fail with [`ScanError::Transport`] or
/// [`ScanError::Deserialization`]; [`ScanError::Configuration`] is reserved
/// for building a client.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The request never produced a successful HTTP response.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The response body does not match the expected JSON shape.
    #[error("Deserialization failure: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Invalid client settings.
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },
}

impl ScanError {
    /// Create a configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this is a network or HTTP status failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the body failed to deserialize.
    #[must_use]
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }
}

/// Failures reported by a [`crate::Transport`].
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL with the API key redacted.
        url: String,
    },

    /// Failure raised by a custom transport implementation.
    #[error("{message}")]
    Custom {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Create a custom transport error.
    pub fn custom<S: Into<String>>(message: S) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// HTTP status code, when the failure was a status failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Custom { .. } => None,
        }
    }
}

/// Result type for explorer API calls.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code() {
        let err = ScanError::from(TransportError::Status {
            status: 502,
            url: "https://api.bscscan.com/api?apikey=***".to_string(),
        });
        assert!(err.is_transport());
        assert!(!err.is_deserialization());
        match err {
            ScanError::Transport(inner) => assert_eq!(inner.status(), Some(502)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_errors_map_to_deserialization() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ScanError = parse.into();
        assert!(err.is_deserialization());
        assert!(err.to_string().starts_with("Deserialization failure"));
    }
}
