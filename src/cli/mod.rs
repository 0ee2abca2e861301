//! Command-line interface for whisk-props
//!
//! Provides `show` and `check` subcommands over the resolved connection settings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod show;
mod utils;

/// Resolve FaaS client connection settings from .wskprops, whisk.properties and the environment
#[derive(Parser)]
#[command(name = "whisk-props")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved connection settings
    Show(show::ShowArgs),

    /// Exit non-zero if the API host or auth key cannot be resolved
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence when set; otherwise WARN, or DEBUG with --verbose.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Check(args) => check::run(args),
    }
}
