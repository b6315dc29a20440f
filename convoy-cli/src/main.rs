//! Convoy CLI
//!
//! Command-line interface for inspecting recorded pipeline runs and
//! scaffolding starter pipeline definitions.

mod commands;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "convoy")]
#[command(about = "Convoy CI status CLI", long_about = None)]
struct Cli {
    /// Hub URL
    #[arg(
        long,
        env = "CONVOY_HUB_URL",
        default_value = "http://localhost:8080"
    )]
    hub_url: String,

    /// Ambient namespace, used unless a command passes --namespace
    #[arg(long, env = "CONVOY_NAMESPACE", default_value = "default")]
    context_namespace: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = Config {
        hub_url: cli.hub_url,
        context_namespace: cli.context_namespace,
    };

    handle_command(cli.command, &config).await
}

/// Install the tracing subscriber.
///
/// Diagnostics go to stderr and are filtered via the RUST_LOG env var,
/// silent by default so report output stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();
}
