//! Convoy Hub Client
//!
//! A simple, type-safe HTTP client for the hub API that stores Repository
//! resources and their accumulated run statuses.
//!
//! The hub is the only collaborator performing I/O on the describe path;
//! everything downstream of a fetched snapshot is pure.
//!
//! # Example
//!
//! ```no_run
//! use convoy_client::HubClient;
//!
//! # async fn example() -> convoy_client::Result<()> {
//! let client = HubClient::new("http://localhost:8080");
//!
//! let repository = client.get_repository("test-run", "default").await?;
//! println!("{} has {} recorded run(s)", repository.name, repository.runs.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod fetch;
mod repositories;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use fetch::RepositoryFetcher;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// HTTP client for the Convoy hub API
#[derive(Debug, Clone)]
pub struct HubClient {
    /// Base URL of the hub (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

/// Error body the hub returns on failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HubClient {
    /// Create a new hub client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hub API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new hub client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hub API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the hub
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // The hub wraps error messages in a JSON body; fall back to
            // the raw text when it does not.
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("invalid JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HubClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HubClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = HubClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
