//! Coursevault CLI
//!
//! Compiles a curriculum vault into one validated JSON artifact.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use coursevault_cli::build::run_build;
use coursevault_cli::cli::{Cli, Command};
use coursevault_cli::config::load_config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "Configuration loaded");

    match &cli.command {
        Command::Build(args) => Ok(ExitCode::from(run_build(args, &config).await?)),
    }
}
