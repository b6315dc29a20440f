//! Repository-related API endpoints

use crate::HubClient;
use crate::error::{ClientError, Result};
use convoy_core::domain::repository::Repository;
use reqwest::StatusCode;

impl HubClient {
    /// Fetch a repository by name within a namespace
    ///
    /// # Arguments
    /// * `name` - The repository name
    /// * `namespace` - The effective namespace to look in
    ///
    /// # Returns
    /// The repository snapshot, or `NotFound` when the (name, namespace)
    /// pair does not address an existing resource
    pub async fn get_repository(&self, name: &str, namespace: &str) -> Result<Repository> {
        let url = format!(
            "{}/api/namespaces/{}/repositories/{}",
            self.base_url(),
            namespace,
            name
        );
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            });
        }

        self.handle_response(response).await
    }

    /// List all repositories in a namespace
    ///
    /// # Arguments
    /// * `namespace` - The namespace to list
    ///
    /// # Returns
    /// The repositories recorded in the namespace
    pub async fn list_repositories(&self, namespace: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/api/namespaces/{}/repositories", self.base_url(), namespace);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
