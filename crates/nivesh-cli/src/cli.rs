//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    CompoundArgs, ConfigArgs, GratuityArgs, LimitsArgs, LumpsumArgs, NpsArgs, NscArgs, PpfArgs,
    SipArgs, SwpArgs,
};

/// Nivesh - personal-finance calculators
#[derive(Parser)]
#[command(name = "nivesh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Limits file (TOML or JSON) merged over the standard limits
    #[arg(short, long, global = true, env = "NIVESH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Systematic Investment Plan: fixed monthly contributions
    Sip(SipArgs),

    /// Single upfront investment
    Lumpsum(LumpsumArgs),

    /// Compound interest with yearly, half-yearly or quarterly compounding
    #[command(visible_alias = "compound-interest")]
    Compound(CompoundArgs),

    /// Statutory gratuity on leaving employment
    Gratuity(GratuityArgs),

    /// National Pension System corpus at retirement
    Nps(NpsArgs),

    /// National Savings Certificate over its fixed tenure
    Nsc(NscArgs),

    /// Public Provident Fund with yearly deposits
    Ppf(PpfArgs),

    /// Systematic Withdrawal Plan
    Swp(SwpArgs),

    /// Show the limits and defaults in force
    Limits(LimitsArgs),

    /// Inspect the limits file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
