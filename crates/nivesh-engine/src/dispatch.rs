//! Evaluation by [`InstrumentKind`] chosen at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nivesh_calc::{
    CompoundInterestResult, GratuityResult, LumpsumResult, NpsResult, NscResult, PpfResult,
    SipResult, SwpResult,
};
use nivesh_core::types::{CompoundingFrequency, InstrumentKind, LimitSet, NscFrequency, ParamId};
use nivesh_core::NiveshResult;

use crate::input::RawInput;
use crate::instrument::{CompoundInterest, Gratuity, Instrument, Lumpsum, Nps, Nsc, Ppf, Sip, Swp};
use crate::session::Calculator;
use crate::validation::ValidationReport;

/// Result of any instrument, tagged by instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument", content = "result", rename_all = "kebab-case")]
pub enum CalculationResult {
    /// SIP projection
    Sip(SipResult),
    /// Lumpsum projection
    Lumpsum(LumpsumResult),
    /// Compound interest projection
    CompoundInterest(CompoundInterestResult),
    /// Gratuity entitlement
    Gratuity(GratuityResult),
    /// NPS projection
    Nps(NpsResult),
    /// NSC projection
    Nsc(NscResult),
    /// PPF projection
    Ppf(PpfResult),
    /// SWP simulation
    Swp(SwpResult),
}

impl CalculationResult {
    /// Returns the instrument that produced this result.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            CalculationResult::Sip(_) => InstrumentKind::Sip,
            CalculationResult::Lumpsum(_) => InstrumentKind::Lumpsum,
            CalculationResult::CompoundInterest(_) => InstrumentKind::CompoundInterest,
            CalculationResult::Gratuity(_) => InstrumentKind::Gratuity,
            CalculationResult::Nps(_) => InstrumentKind::Nps,
            CalculationResult::Nsc(_) => InstrumentKind::Nsc,
            CalculationResult::Ppf(_) => InstrumentKind::Ppf,
            CalculationResult::Swp(_) => InstrumentKind::Swp,
        }
    }

    /// Labelled numeric fields, in display order.
    ///
    /// Unrounded SIP and lumpsum amounts are rounded to whole units here.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            CalculationResult::Sip(r) => {
                let shown = r.rounded();
                vec![
                    ("Total Invested", shown.total_invested),
                    ("Estimated Returns", shown.gain),
                    ("Maturity Value", shown.maturity),
                    ("Months", f64::from(r.months)),
                ]
            }
            CalculationResult::Lumpsum(r) => {
                let shown = r.rounded();
                vec![
                    ("Total Invested", shown.total_invested),
                    ("Estimated Returns", shown.gain),
                    ("Maturity Value", shown.maturity),
                ]
            }
            CalculationResult::CompoundInterest(r) => vec![
                ("Invested Amount", r.invested_amount),
                ("Estimated Returns", r.estimated_returns),
                ("Total Amount", r.total_amount),
                ("Periods Per Year", f64::from(r.n)),
            ],
            CalculationResult::Gratuity(r) => vec![
                ("Years Counted", r.rounded_years),
                ("Gratuity Before Cap", r.gratuity_raw),
                ("Gratuity Payable", r.gratuity_capped),
                ("Statutory Cap", r.cap),
            ],
            CalculationResult::Nps(r) => vec![
                ("Total Investment", r.total_investment),
                ("Interest Earned", r.interest_earned),
                ("Maturity Amount", r.maturity_amount),
                ("Min Annuity Investment", r.min_annuity_investment),
                ("Tenure Years", r.tenure_years),
            ],
            CalculationResult::Nsc(r) => vec![
                ("Invested Amount", r.invested_amount),
                ("Total Interest", r.total_interest),
                ("Maturity Value", r.total_amount),
                ("Tenure Years", r.years),
            ],
            CalculationResult::Ppf(r) => vec![
                ("Invested Amount", r.invested_amount),
                ("Total Interest", r.total_interest),
                ("Maturity Value", r.maturity_value),
            ],
            CalculationResult::Swp(r) => vec![
                ("Total Investment", r.invested_amount),
                ("Total Withdrawal", r.total_withdrawal),
                ("Final Value", r.final_value),
            ],
        }
    }
}

macro_rules! impl_from_result {
    ($($result:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$result> for CalculationResult {
                fn from(result: $result) -> Self {
                    CalculationResult::$variant(result)
                }
            }
        )*
    };
}

impl_from_result! {
    SipResult => Sip,
    LumpsumResult => Lumpsum,
    CompoundInterestResult => CompoundInterest,
    GratuityResult => Gratuity,
    NpsResult => Nps,
    NscResult => Nsc,
    PpfResult => Ppf,
    SwpResult => Swp,
}

/// Options understood by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluateOptions {
    /// Compounding frequency for compound interest and NSC. Instruments
    /// without a frequency ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<CompoundingFrequency>,
}

/// A complete evaluation: inputs, the values the formula used, validation and
/// result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Instrument evaluated.
    pub kind: InstrumentKind,
    /// Canonical values.
    pub inputs: BTreeMap<ParamId, f64>,
    /// Safe values passed to the formula.
    pub safe: BTreeMap<ParamId, f64>,
    /// Below-minimum report.
    pub validation: ValidationReport,
    /// Formula result.
    #[serde(flatten)]
    pub result: CalculationResult,
}

/// Evaluates `kind` against `limits`.
///
/// Parameters missing from `raw` start from their limit default. Naming a
/// parameter the instrument does not take, or asking NSC for quarterly
/// compounding, is an error.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use nivesh_config::standard_limits;
/// use nivesh_core::{InstrumentKind, ParamId};
/// use nivesh_engine::{evaluate, CalculationResult, EvaluateOptions, RawInput};
///
/// let kind = InstrumentKind::Gratuity;
/// let raw = BTreeMap::from([(ParamId::MonthlySalary, RawInput::from("60000"))]);
/// let eval = evaluate(kind, &standard_limits(kind), &raw, EvaluateOptions::default()).unwrap();
///
/// match eval.result {
///     CalculationResult::Gratuity(g) => assert_eq!(g.gratuity_capped, 692_308.0),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn evaluate(
    kind: InstrumentKind,
    limits: &LimitSet,
    raw: &BTreeMap<ParamId, RawInput>,
    options: EvaluateOptions,
) -> NiveshResult<Evaluation> {
    let frequency = options.frequency.unwrap_or_default();
    match kind {
        InstrumentKind::Sip => run::<Sip>(limits, raw, ()),
        InstrumentKind::Lumpsum => run::<Lumpsum>(limits, raw, ()),
        InstrumentKind::CompoundInterest => run::<CompoundInterest>(limits, raw, frequency),
        InstrumentKind::Gratuity => run::<Gratuity>(limits, raw, ()),
        InstrumentKind::Nps => run::<Nps>(limits, raw, ()),
        InstrumentKind::Nsc => run::<Nsc>(limits, raw, NscFrequency::try_from(frequency)?),
        InstrumentKind::Ppf => run::<Ppf>(limits, raw, ()),
        InstrumentKind::Swp => run::<Swp>(limits, raw, ()),
    }
}

fn run<I: Instrument>(
    limits: &LimitSet,
    raw: &BTreeMap<ParamId, RawInput>,
    options: I::Options,
) -> NiveshResult<Evaluation> {
    let mut calculator = Calculator::<I>::with_limits(limits.clone())?.with_options(options);
    calculator.set_all(raw.iter().map(|(param, value)| (*param, value.clone())))?;
    Ok(calculator.evaluation())
}
