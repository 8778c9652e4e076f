mod cli;
mod config;
mod error;
mod html;
mod rewrite;
mod transform;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing - only show warnings by default, use RUST_LOG=info for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split { path, output } => {
            cli::commands::split::run(&path, output.as_deref())?;
        }
        Commands::Inspect { path } => {
            cli::commands::inspect::run(&path)?;
        }
    }

    Ok(())
}
