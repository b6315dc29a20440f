//! Configuration module
//!
//! Carries the hub address and ambient namespace down to command handlers.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the hub service
    pub hub_url: String,
    /// Ambient namespace from the environment, overridable per command
    pub context_namespace: String,
}
