//! Error types for outbound forwarding.
//!
//! Only transport-level failures are errors here. An HTTP error status
//! from the downstream endpoint is a successful delivery as far as this
//! crate is concerned — the relay logs it and moves on.

use thiserror::Error;

/// Result type alias for forwarding operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Failures that can occur while forwarding a record downstream.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// Network-level connectivity failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Error message describing the network failure
        message: String,
    },

    /// HTTP request timeout exceeded.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Number of seconds before the request timed out
        timeout_seconds: u64,
    },

    /// The payload could not be serialized or the client could not be
    /// built.
    #[error("invalid forwarding configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl DeliveryError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_format() {
        assert_eq!(DeliveryError::timeout(30).to_string(), "request timeout after 30s");
        assert_eq!(
            DeliveryError::network("connection refused").to_string(),
            "network connection failed: connection refused"
        );
    }
}
