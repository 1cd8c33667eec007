//! Nivesh CLI - Command-line interface for the personal-finance calculators.
//!
//! # Usage
//!
//! ```bash
//! # Project a monthly SIP
//! nivesh sip --amount 25000 --rate 12 --years 10
//!
//! # Quarterly compound interest, as JSON
//! nivesh compound --principal 100000 --rate 8 --years 5 --frequency quarterly -f json
//!
//! # Month-by-month withdrawal ledger
//! nivesh swp --investment 500000 --withdrawal 10000 --schedule
//!
//! # Limits in force, with a custom limits file
//! nivesh --config limits.toml limits sip
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nivesh_config::{load_effective, resolve_path};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, OutputFormat};
use commands::CalculatorArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Sip(args) => calculate(&args, config_path, format)?,
        Commands::Lumpsum(args) => calculate(&args, config_path, format)?,
        Commands::Compound(args) => calculate(&args, config_path, format)?,
        Commands::Gratuity(args) => calculate(&args, config_path, format)?,
        Commands::Nps(args) => calculate(&args, config_path, format)?,
        Commands::Nsc(args) => calculate(&args, config_path, format)?,
        Commands::Ppf(args) => calculate(&args, config_path, format)?,
        Commands::Swp(args) => calculate(&args, config_path, format)?,
        Commands::Limits(args) => {
            let limits = load_effective(config_path)?;
            commands::limits::execute(&args, &limits, format)?;
        }
        Commands::Config(args) => commands::config::execute(&args, config_path, format)?,
    }

    Ok(())
}

fn calculate<A: CalculatorArgs>(
    args: &A,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let limits = load_effective(config_path)?;
    tracing::debug!(
        instrument = %A::KIND,
        limits_file = ?resolve_path(config_path),
        "limits ready"
    );
    commands::calculate::execute(args, &limits, format)?;
    Ok(())
}

/// Logs go to stderr so they never mix with JSON or CSV output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nivesh=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
