//! # Client Error Types
//!
//! Error types for endpoint operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Response     │  │    Configuration        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Http{status}   │  │  InvalidConfig          │ │
//! │  │                 │  │  Deserialize    │  │  InvalidUrl             │ │
//! │  │                 │  │                 │  │  ConfigLoad             │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  `Network` and `Http` are the two kinds an operation caller ever       │
//! │  reacts to; the rest indicate a broken deployment, not a failed call.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type covering all endpoint failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Errors are categorized for different handling strategies
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The transport layer rejected the request (DNS failure, refused
    /// connection, timeout). Nothing reached the endpoint.
    #[error("Network error: {0}")]
    Network(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The endpoint answered with a non-success status.
    #[error("Request failed with status {status}")]
    Http { status: u16 },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Deserialize(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid base or endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoad(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // A status error only appears here if a caller used error_for_status;
        // the clients check statuses explicitly, so this is the transport path
        match err.status() {
            Some(status) => ClientError::Http {
                status: status.as_u16(),
            },
            None => ClientError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialize(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoad(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true for transport-level rejections (the request never got an
    /// answer).
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Returns true when the endpoint answered with a non-success status.
    pub fn is_http(&self) -> bool {
        matches!(self, ClientError::Http { .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoad(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(ClientError::Network("connection refused".into()).is_network());
        assert!(ClientError::Http { status: 422 }.is_http());
        assert!(!ClientError::Http { status: 422 }.is_network());
        assert!(ClientError::InvalidUrl("not a url".into()).is_config_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClientError::Http { status: 404 }.to_string(),
            "Request failed with status 404"
        );
        assert!(ClientError::Network("dns failure".into())
            .to_string()
            .contains("dns failure"));
    }
}
