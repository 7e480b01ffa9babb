//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CONFIG_ENV;

/// Coursevault - compile a curriculum vault into one validated JSON artifact
#[derive(Parser, Debug)]
#[command(name = "coursevault", version)]
#[command(about = "Compile a curriculum vault into one validated JSON artifact", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse, validate, flatten and bundle a vault
    Build(BuildArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Vault directory
    pub vault: PathBuf,

    /// Write the artifact here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Exit with status 2 when the artifact contains errors
    #[arg(long)]
    pub strict: bool,
}
