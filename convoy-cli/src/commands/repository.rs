//! Repository command handlers
//!
//! Handles repository inspection commands: describing the recorded run
//! ledger of a single repository and listing the repositories known in a
//! namespace.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use convoy_client::{HubClient, RepositoryFetcher};
use convoy_core::clock::{Clock, SystemClock};
use convoy_core::domain::repository::Repository;
use convoy_core::namespace::resolve_namespace;

use crate::config::Config;
use crate::report;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepositoryCommands {
    /// Show the recorded pipeline runs of a repository
    Describe {
        /// Repository name
        name: String,

        /// Namespace override; defaults to the context namespace
        #[arg(short, long)]
        namespace: Option<String>,
    },
    /// List repositories in a namespace
    List {
        /// Namespace override; defaults to the context namespace
        #[arg(short, long)]
        namespace: Option<String>,
    },
}

/// Handle repository commands
///
/// Routes repository subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The repository command to execute
/// * `config` - The CLI configuration
pub async fn handle_repository_command(
    command: RepositoryCommands,
    config: &Config,
) -> Result<()> {
    let client = HubClient::new(&config.hub_url);

    match command {
        RepositoryCommands::Describe { name, namespace } => {
            let report = describe(
                &client,
                &SystemClock,
                config,
                &name,
                namespace.as_deref().unwrap_or(""),
            )
            .await?;
            print!("{}", report);
            Ok(())
        }
        RepositoryCommands::List { namespace } => {
            list_repositories(&client, config, namespace.as_deref().unwrap_or("")).await
        }
    }
}

/// Fetch a repository and render its run report.
///
/// Fetch errors (including `NotFound`) propagate unchanged; rendering
/// itself cannot fail.
async fn describe<F: RepositoryFetcher, C: Clock>(
    fetcher: &F,
    clock: &C,
    config: &Config,
    name: &str,
    namespace_override: &str,
) -> Result<String> {
    let namespace = resolve_namespace(&config.context_namespace, namespace_override);
    let repository = fetcher.fetch(name, &namespace).await?;

    Ok(report::render(&repository, clock))
}

/// List repositories in the effective namespace
async fn list_repositories(
    client: &HubClient,
    config: &Config,
    namespace_override: &str,
) -> Result<()> {
    let namespace = resolve_namespace(&config.context_namespace, namespace_override);
    let repositories = client.list_repositories(&namespace).await?;

    if repositories.is_empty() {
        println!(
            "{}",
            format!("No repositories found in namespace {}.", namespace).yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "Found {} repository(ies) in namespace {}:",
                repositories.len(),
                namespace
            )
            .bold()
        );
        println!();
        for repository in repositories {
            print_repository_summary(&repository);
        }
    }

    Ok(())
}

/// Print a repository summary
fn print_repository_summary(repository: &Repository) {
    println!("  {} {}", "▸".cyan(), repository.name.bold());
    println!("    URL:  {}", repository.source_url.dimmed());
    println!(
        "    Runs: {}",
        repository.runs.len().to_string().dimmed()
    );
    println!();
}
