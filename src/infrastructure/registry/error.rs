use thiserror::Error;

/// Errors that can occur when talking to the community registry.
///
/// No variant is retried internally; a single failed page fetch aborts the
/// whole listing operation and surfaces here.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network-level failure: connection refused, DNS, TLS, reset
    #[error("failed to execute request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request exceeded the configured client timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The registry answered with a non-2xx status
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// HTTP status code returned by the registry
        status: u16,
    },

    /// The response body did not match the registry's JSON envelope
    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A server reference could not be parsed into a registry URL
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl {
        /// The offending reference
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RegistryError {
    /// Classify a reqwest failure, keeping timeouts distinguishable from
    /// other transport problems.
    pub(crate) fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    /// Returns true if this error is transient from the caller's point of
    /// view (worth retrying on a later invocation).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout(_) | Self::UnexpectedStatus { status: 500..=599 }
        )
    }
}
