//! Repository fetch capability
//!
//! Commands address the hub through this trait so tests can substitute a
//! fake that serves fixtures instead of going over HTTP.

use async_trait::async_trait;
use convoy_core::domain::repository::Repository;

use crate::HubClient;
use crate::error::Result;

/// Fetches repository snapshots by (name, namespace).
#[async_trait]
pub trait RepositoryFetcher {
    /// Fetch one repository, failing with `NotFound` when the pair does
    /// not address an existing resource.
    async fn fetch(&self, name: &str, namespace: &str) -> Result<Repository>;
}

#[async_trait]
impl RepositoryFetcher for HubClient {
    async fn fetch(&self, name: &str, namespace: &str) -> Result<Repository> {
        self.get_repository(name, namespace).await
    }
}
