//! Calculator commands.
//!
//! Parameters are taken as raw text and go through the same canonicalization
//! as interactive input: blank or malformed values become zero, values above
//! the ceiling are clamped, and values below the minimum are reported and
//! replaced by the minimum for the calculation. Omitted parameters start from
//! their default.

use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nivesh_calc::{lumpsum_schedule, sip_schedule, swp_schedule, SipYear, SwpMonth};
use nivesh_config::LimitsConfig;
use nivesh_core::types::{CompoundingFrequency, InstrumentKind, LimitSet, NscFrequency, ParamId};
use nivesh_engine::{evaluate, CalculationResult, EvaluateOptions, Evaluation, RawInput};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{
    format_amount, print_csv, print_header, print_json, print_output, print_table, print_warning,
    KeyValue,
};

/// A calculator subcommand.
pub trait CalculatorArgs {
    /// Instrument computed by this command.
    const KIND: InstrumentKind;

    /// Parameters given on the command line.
    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput>;

    /// Options for the evaluation.
    fn options(&self) -> EvaluateOptions {
        EvaluateOptions::default()
    }

    /// True if the period-by-period schedule was requested.
    fn schedule(&self) -> bool {
        false
    }
}

fn given(pairs: &[(ParamId, Option<&str>)]) -> BTreeMap<ParamId, RawInput> {
    pairs
        .iter()
        .filter_map(|(param, raw)| raw.map(|text| (*param, RawInput::from(text))))
        .collect()
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Arguments for the sip command.
#[derive(Args, Debug)]
pub struct SipArgs {
    /// Monthly investment
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub monthly_amount: Option<String>,

    /// Expected annual return (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Investment period in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Also print the year-by-year schedule
    #[arg(long)]
    pub schedule: bool,
}

impl CalculatorArgs for SipArgs {
    const KIND: InstrumentKind = InstrumentKind::Sip;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::MonthlyAmount, self.monthly_amount.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
            (ParamId::Years, self.years.as_deref()),
        ])
    }

    fn schedule(&self) -> bool {
        self.schedule
    }
}

/// Arguments for the lumpsum command.
#[derive(Args, Debug)]
pub struct LumpsumArgs {
    /// Amount invested upfront
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Expected annual return (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Investment period in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Also print the year-by-year schedule
    #[arg(long)]
    pub schedule: bool,
}

impl CalculatorArgs for LumpsumArgs {
    const KIND: InstrumentKind = InstrumentKind::Lumpsum;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::Principal, self.principal.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
            (ParamId::Years, self.years.as_deref()),
        ])
    }

    fn schedule(&self) -> bool {
        self.schedule
    }
}

/// Arguments for the compound command.
#[derive(Args, Debug)]
pub struct CompoundArgs {
    /// Principal amount
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Annual interest rate (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Period in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Compounding frequency: yearly, half-yearly or quarterly
    #[arg(long)]
    pub frequency: Option<CompoundingFrequency>,
}

impl CalculatorArgs for CompoundArgs {
    const KIND: InstrumentKind = InstrumentKind::CompoundInterest;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::Principal, self.principal.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
            (ParamId::Years, self.years.as_deref()),
        ])
    }

    fn options(&self) -> EvaluateOptions {
        EvaluateOptions {
            frequency: self.frequency,
        }
    }
}

/// Arguments for the gratuity command.
#[derive(Args, Debug)]
pub struct GratuityArgs {
    /// Last drawn monthly salary (basic + dearness allowance)
    #[arg(long, visible_alias = "salary", allow_hyphen_values = true)]
    pub monthly_salary: Option<String>,

    /// Years of service
    #[arg(long, visible_alias = "years", allow_hyphen_values = true)]
    pub years_of_service: Option<String>,
}

impl CalculatorArgs for GratuityArgs {
    const KIND: InstrumentKind = InstrumentKind::Gratuity;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::MonthlySalary, self.monthly_salary.as_deref()),
            (ParamId::YearsOfService, self.years_of_service.as_deref()),
        ])
    }
}

/// Arguments for the nps command.
#[derive(Args, Debug)]
pub struct NpsArgs {
    /// Monthly contribution
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub monthly_amount: Option<String>,

    /// Expected annual return (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Current age
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Age at retirement
    #[arg(long, allow_hyphen_values = true)]
    pub retirement_age: Option<String>,
}

impl CalculatorArgs for NpsArgs {
    const KIND: InstrumentKind = InstrumentKind::Nps;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::MonthlyAmount, self.monthly_amount.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
            (ParamId::Age, self.age.as_deref()),
            (ParamId::RetirementAge, self.retirement_age.as_deref()),
        ])
    }
}

/// Arguments for the nsc command.
#[derive(Args, Debug)]
pub struct NscArgs {
    /// Amount invested
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Annual interest rate (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Compounding frequency: yearly or half-yearly
    #[arg(long)]
    pub frequency: Option<NscFrequency>,
}

impl CalculatorArgs for NscArgs {
    const KIND: InstrumentKind = InstrumentKind::Nsc;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::Principal, self.principal.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
        ])
    }

    fn options(&self) -> EvaluateOptions {
        EvaluateOptions {
            frequency: self.frequency.map(CompoundingFrequency::from),
        }
    }
}

/// Arguments for the ppf command.
#[derive(Args, Debug)]
pub struct PpfArgs {
    /// Deposit made every year
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub yearly_investment: Option<String>,

    /// Number of yearly deposits
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Annual interest rate (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,
}

impl CalculatorArgs for PpfArgs {
    const KIND: InstrumentKind = InstrumentKind::Ppf;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::YearlyInvestment, self.yearly_investment.as_deref()),
            (ParamId::Years, self.years.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
        ])
    }
}

/// Arguments for the swp command.
#[derive(Args, Debug)]
pub struct SwpArgs {
    /// Starting corpus
    #[arg(long, visible_alias = "amount", allow_hyphen_values = true)]
    pub investment: Option<String>,

    /// Amount withdrawn every month
    #[arg(long, allow_hyphen_values = true)]
    pub withdrawal: Option<String>,

    /// Expected annual return (percent)
    #[arg(long, visible_alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<String>,

    /// Withdrawal period in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Also print the month-by-month ledger
    #[arg(long)]
    pub schedule: bool,
}

impl CalculatorArgs for SwpArgs {
    const KIND: InstrumentKind = InstrumentKind::Swp;

    fn raw_inputs(&self) -> BTreeMap<ParamId, RawInput> {
        given(&[
            (ParamId::Investment, self.investment.as_deref()),
            (ParamId::Withdrawal, self.withdrawal.as_deref()),
            (ParamId::AnnualRate, self.annual_rate.as_deref()),
            (ParamId::Years, self.years.as_deref()),
        ])
    }

    fn schedule(&self) -> bool {
        self.schedule
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One parameter in the inputs table.
#[derive(Debug, Tabled)]
struct InputRow {
    #[tabled(rename = "Parameter")]
    parameter: &'static str,
    #[tabled(rename = "Entered")]
    entered: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Range")]
    range: String,
}

/// One year of a SIP or lumpsum schedule.
#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Invested", display_with = "display_amount")]
    invested: f64,
    #[tabled(rename = "Value", display_with = "display_amount")]
    value: f64,
}

impl From<SipYear> for YearRow {
    fn from(year: SipYear) -> Self {
        Self {
            year: year.year,
            invested: year.invested,
            value: year.value,
        }
    }
}

/// One month of the SWP ledger.
#[derive(Debug, Serialize, Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Opening", display_with = "display_amount")]
    opening: f64,
    #[tabled(rename = "Growth", display_with = "display_amount")]
    growth: f64,
    #[tabled(rename = "Withdrawal", display_with = "display_amount")]
    withdrawal: f64,
    #[tabled(rename = "Closing", display_with = "display_amount")]
    closing: f64,
}

impl From<SwpMonth> for MonthRow {
    fn from(month: SwpMonth) -> Self {
        Self {
            month: month.month,
            opening: month.opening,
            growth: month.growth,
            withdrawal: month.withdrawal,
            closing: month.closing,
        }
    }
}

fn display_amount(value: &f64) -> String {
    format_amount(*value)
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Schedule {
    Yearly(Vec<YearRow>),
    Monthly(Vec<MonthRow>),
}

impl Schedule {
    /// Builds the schedule from the values the evaluation used.
    fn build(evaluation: &Evaluation) -> Option<Self> {
        let value = |param: ParamId| evaluation.safe.get(&param).copied().unwrap_or(0.0);
        match evaluation.kind {
            InstrumentKind::Sip => {
                let rows = sip_schedule(
                    value(ParamId::MonthlyAmount),
                    value(ParamId::AnnualRate),
                    value(ParamId::Years),
                );
                Some(Schedule::Yearly(rows.into_iter().map(YearRow::from).collect()))
            }
            InstrumentKind::Lumpsum => {
                let principal = value(ParamId::Principal);
                let rows = lumpsum_schedule(
                    principal,
                    value(ParamId::AnnualRate),
                    value(ParamId::Years),
                );
                Some(Schedule::Yearly(
                    rows.into_iter()
                        .map(|year| YearRow {
                            year: year.year,
                            invested: principal,
                            value: year.value,
                        })
                        .collect(),
                ))
            }
            InstrumentKind::Swp => {
                let rows = swp_schedule(
                    value(ParamId::Investment),
                    value(ParamId::Withdrawal),
                    value(ParamId::AnnualRate),
                    value(ParamId::Years),
                );
                Some(Schedule::Monthly(rows.into_iter().map(MonthRow::from).collect()))
            }
            _ => None,
        }
    }

    fn print(&self, format: OutputFormat) -> CliResult<()> {
        match self {
            Schedule::Yearly(rows) => print_output(rows, format),
            Schedule::Monthly(rows) => print_output(rows, format),
        }
    }
}

#[derive(Serialize)]
struct CalculationOutput<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<&'a Schedule>,
}

fn input_rows(evaluation: &Evaluation, limits: &LimitSet) -> Vec<InputRow> {
    limits
        .iter()
        .map(|(param, limit)| {
            let entered = evaluation.inputs.get(&param).copied().unwrap_or(0.0);
            let used = evaluation.safe.get(&param).copied().unwrap_or(0.0);
            let range = match limit.max {
                Some(max) => format!(
                    "{} - {}",
                    limit.precision.format(limit.min),
                    limit.precision.format(max)
                ),
                None => format!(">= {}", limit.precision.format(limit.min)),
            };
            InputRow {
                parameter: param.label(),
                entered: format_amount(entered),
                used: format_amount(used),
                range,
            }
        })
        .collect()
}

fn result_rows(result: &CalculationResult) -> Vec<KeyValue> {
    let mut rows: Vec<KeyValue> = result
        .fields()
        .into_iter()
        .map(|(label, value)| KeyValue::from_amount(label, value))
        .collect();
    if let CalculationResult::Gratuity(gratuity) = result {
        rows.push(KeyValue::new("Capped", if gratuity.capped { "yes" } else { "no" }));
    }
    rows
}

/// The single figure printed by `--format minimal`.
fn headline(result: &CalculationResult) -> f64 {
    match result {
        CalculationResult::Sip(r) => r.rounded().maturity,
        CalculationResult::Lumpsum(r) => r.rounded().maturity,
        CalculationResult::CompoundInterest(r) => r.total_amount,
        CalculationResult::Gratuity(r) => r.gratuity_capped,
        CalculationResult::Nps(r) => r.maturity_amount,
        CalculationResult::Nsc(r) => r.total_amount,
        CalculationResult::Ppf(r) => r.maturity_value,
        CalculationResult::Swp(r) => r.final_value,
    }
}

/// Runs a calculator command.
pub fn execute<A: CalculatorArgs>(
    args: &A,
    config: &LimitsConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let kind = A::KIND;
    let limits = config.get(kind);
    let raw = args.raw_inputs();
    let evaluation = evaluate(kind, limits, &raw, args.options())?;
    tracing::debug!(
        instrument = %kind,
        given = raw.len(),
        below_minimum = evaluation.validation.errors().count(),
        "evaluated"
    );

    for (param, check) in evaluation.validation.errors() {
        print_warning(&format!("{}: {}", param.label(), check.message));
    }

    let schedule = if args.schedule() {
        Schedule::build(&evaluation)
    } else {
        None
    };

    match format {
        OutputFormat::Table => {
            print_header(kind.label());
            print_table(&input_rows(&evaluation, limits))?;
            print_table(&result_rows(&evaluation.result))?;
            if let Some(schedule) = &schedule {
                print_header("Schedule");
                schedule.print(format)?;
            }
        }
        OutputFormat::Json => print_json(&CalculationOutput {
            evaluation: &evaluation,
            schedule: schedule.as_ref(),
        })?,
        OutputFormat::Csv => match &schedule {
            Some(schedule) => schedule.print(format)?,
            None => print_csv(&result_rows(&evaluation.result))?,
        },
        OutputFormat::Minimal => println!("{}", format_amount(headline(&evaluation.result))),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_given_inputs_are_passed() {
        let args = SipArgs {
            monthly_amount: Some("5000".to_string()),
            annual_rate: None,
            years: Some(String::new()),
            schedule: false,
        };
        let raw = args.raw_inputs();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[&ParamId::MonthlyAmount], RawInput::from("5000"));
        assert!(raw[&ParamId::Years].is_empty());
    }

    #[test]
    fn test_nsc_frequency_option() {
        let args = NscArgs {
            principal: None,
            annual_rate: None,
            frequency: Some(NscFrequency::HalfYearly),
        };
        assert_eq!(
            args.options().frequency,
            Some(CompoundingFrequency::HalfYearly)
        );
    }

    #[test]
    fn test_schedule_follows_safe_values() {
        let config = LimitsConfig::standard();
        let kind = InstrumentKind::Lumpsum;
        let raw = BTreeMap::from([(ParamId::Years, RawInput::from("3"))]);
        let evaluation =
            evaluate(kind, config.get(kind), &raw, EvaluateOptions::default()).unwrap();
        match Schedule::build(&evaluation) {
            Some(Schedule::Yearly(rows)) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].invested, 100_000.0);
            }
            other => panic!("unexpected schedule {other:?}"),
        }
    }

    #[test]
    fn test_inputs_show_canonical_values() {
        let config = LimitsConfig::standard();
        let kind = InstrumentKind::Ppf;
        let raw = BTreeMap::from([(ParamId::Years, RawInput::from("0.4"))]);
        let evaluation =
            evaluate(kind, config.get(kind), &raw, EvaluateOptions::default()).unwrap();
        let rows = input_rows(&evaluation, config.get(kind));
        let years = rows.iter().find(|r| r.parameter == ParamId::Years.label()).unwrap();
        assert_eq!(years.entered, "0.40");
        assert_eq!(years.used, "15");
        assert_eq!(years.range, "15 - 50");
    }

    #[test]
    fn test_headline() {
        let config = LimitsConfig::standard();
        let kind = InstrumentKind::Gratuity;
        let evaluation =
            evaluate(kind, config.get(kind), &BTreeMap::new(), EvaluateOptions::default())
                .unwrap();
        assert_eq!(headline(&evaluation.result), 692_308.0);
        assert_eq!(result_rows(&evaluation.result).last().unwrap().value, "no");
    }
}
