//! Error types for the registry client.

/// Registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Authentication rejected (401).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Resource absent in the registry (404).
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The registry rejected the request as malformed (400).
    ///
    /// Carries the `message` field of the structured error body, falling
    /// back to its `error` field when absent.
    #[error("validation rejected: {message}")]
    Validation { message: String },

    /// Any other non-success outcome, with the status reason text.
    #[error("unexpected response: HTTP {status} {reason}")]
    Unclassified { status: u16, reason: String },

    /// Transport failure that produced no response.
    #[error("network error: {message}")]
    Network { message: String },

    /// A successful response whose body did not deserialize.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// The request was cancelled or timed out before completing.
    #[error("request cancelled")]
    Cancelled,

    /// Configuration error, raised at construction only.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RegistryError {
    /// Whether the transport may retry the request.
    ///
    /// Only failures that never produced a classified outcome (network) or
    /// carry a transient status are retryable. `Unauthorized`, `NotFound`
    /// and `Validation` are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Unclassified { status, .. } => *status == 408 || (500..=599).contains(status),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Cancelled
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
