//! Error types for the Convoy hub client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the hub
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("hub error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the hub
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Repository absent from the namespace it was addressed in
    #[error("repository {name} not found in namespace {namespace}")]
    NotFound {
        /// Repository name
        name: String,
        /// Effective namespace the lookup ran against
        namespace: String,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. }) || matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_resource_and_namespace() {
        let err = ClientError::NotFound {
            name: "test-run".to_string(),
            namespace: "namespace".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "repository test-run not found in namespace namespace"
        );
    }

    #[test]
    fn test_api_404_counts_as_not_found() {
        assert!(ClientError::api_error(404, "gone").is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
    }
}
