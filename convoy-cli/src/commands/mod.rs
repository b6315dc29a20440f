//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod generate;
mod repository;

pub use repository::RepositoryCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Repository inspection
    Repository {
        #[command(subcommand)]
        command: RepositoryCommands,
    },
    /// Scaffold a starter pipeline definition
    Generate {
        /// Git event type that triggers the pipeline
        #[arg(long, value_parser = ["pull_request", "push"], default_value = "pull_request")]
        event_type: String,

        /// Target branch (or tag, for push events)
        #[arg(long, default_value = "main")]
        branch: String,

        /// Directory to generate into
        #[arg(short, long, default_value = ".")]
        output: String,

        /// Overwrite an existing definition file
        #[arg(long)]
        force: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Repository { command } => {
            repository::handle_repository_command(command, config).await
        }
        Commands::Generate {
            event_type,
            branch,
            output,
            force,
        } => generate::handle_generate_command(&event_type, &branch, &output, force).await,
    }
}
