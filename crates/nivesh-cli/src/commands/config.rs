//! Config command implementation.
//!
//! Inspects the optional limits file.

use std::path::Path;

use clap::{Args, Subcommand};

use nivesh_config::{load_effective, load_limits, resolve_path, to_toml};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_json, print_success};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective limits in limits-file form
    Show,

    /// Show which limits file is used
    Path,

    /// Check the limits file without running a calculation
    Validate,
}

/// Execute the config command.
pub fn execute(args: &ConfigArgs, path: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, format),
        ConfigCommand::Path => execute_path(path, format),
        ConfigCommand::Validate => execute_validate(path, format),
    }
}

/// Show the effective limits.
fn execute_show(path: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    let config = load_effective(path)?;
    match format {
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            print!("{}", to_toml(&config)?);
        }
    }
    Ok(())
}

/// Show the limits file location.
fn execute_path(path: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    let resolved = resolve_path(path);
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": resolved.as_ref().map(|p| p.display().to_string()),
                "exists": resolved.as_ref().is_some_and(|p| p.exists()),
            });
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            if let Some(p) = resolved {
                println!("{}", p.display());
            }
        }
        OutputFormat::Table | OutputFormat::Csv => match resolved {
            Some(p) => {
                print_info(&format!("Limits file: {}", p.display()));
                if p.exists() {
                    print_info("Status: exists");
                } else {
                    print_info("Status: missing");
                }
            }
            None => print_info("No limits file (using standard limits)"),
        },
    }
    Ok(())
}

/// Validate the limits file.
fn execute_validate(path: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    let resolved = resolve_path(path).ok_or(CliError::NoConfigFile)?;
    load_limits(&resolved)?;
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": resolved.display().to_string(),
                "valid": true,
            });
            print_json(&output)?;
        }
        OutputFormat::Minimal => println!("valid"),
        OutputFormat::Table | OutputFormat::Csv => {
            print_success(&format!("{} is valid", resolved.display()));
        }
    }
    Ok(())
}
