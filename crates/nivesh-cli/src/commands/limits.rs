//! Limits command implementation.
//!
//! Lists the ranges and defaults in force, after any limits file is applied.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nivesh_config::LimitsConfig;
use nivesh_core::types::{InstrumentKind, LimitSet, ParamId};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{print_csv, print_header, print_json, print_table};

/// Arguments for the limits command.
#[derive(Args, Debug)]
pub struct LimitsArgs {
    /// Instrument to show (all if omitted)
    pub instrument: Option<InstrumentKind>,
}

/// One parameter limit.
#[derive(Debug, Serialize, Tabled)]
pub struct LimitRow {
    #[tabled(rename = "Instrument")]
    pub instrument: InstrumentKind,
    #[tabled(rename = "Parameter")]
    pub parameter: ParamId,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Max")]
    pub max: String,
    #[tabled(rename = "Default")]
    pub default: String,
}

fn rows(kind: InstrumentKind, limits: &LimitSet) -> Vec<LimitRow> {
    limits
        .iter()
        .map(|(param, limit)| LimitRow {
            instrument: kind,
            parameter: param,
            min: limit.precision.format(limit.min),
            max: limit
                .max
                .map(|max| limit.precision.format(max))
                .unwrap_or_default(),
            default: limit.precision.format(limit.default),
        })
        .collect()
}

/// Execute the limits command.
pub fn execute(args: &LimitsArgs, config: &LimitsConfig, format: OutputFormat) -> CliResult<()> {
    let kinds = match args.instrument {
        Some(kind) => vec![kind],
        None => InstrumentKind::ALL.to_vec(),
    };

    match format {
        OutputFormat::Table => {
            for kind in kinds {
                print_header(kind.label());
                print_table(&rows(kind, config.get(kind)))?;
            }
        }
        OutputFormat::Json => match args.instrument {
            Some(kind) => print_json(config.get(kind))?,
            None => print_json(config)?,
        },
        OutputFormat::Csv => {
            let all: Vec<LimitRow> = kinds
                .into_iter()
                .flat_map(|kind| rows(kind, config.get(kind)))
                .collect();
            print_csv(&all)?;
        }
        OutputFormat::Minimal => {
            for kind in kinds {
                for (param, limit) in config.get(kind).iter() {
                    println!("{kind}.{param}={}", limit.precision.format(limit.default));
                }
            }
        }
    }

    Ok(())
}
