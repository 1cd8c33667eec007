//! Calculator sessions.
//!
//! A [`Calculator`] owns the parameters of one instrument. Every edit is
//! canonicalized, validated and fed to the formula straight away, so the
//! cached result always reflects the latest input.
//!
//! ```text
//!   Idle ──set/evaluate──> Editing ──> Validated ──> Computed
//!    ^                                                  │
//!    └──────────────────────── reset ───────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use nivesh_config::{standard_limits, LimitsConfig};
use nivesh_core::types::{Cycle, InstrumentKind, LimitSet, ParamId};
use nivesh_core::{NiveshError, NiveshResult};

use crate::dispatch::Evaluation;
use crate::input::{canonicalize, safe_value, RawInput};
use crate::instrument::Instrument;
use crate::validation::ValidationReport;

/// Lifecycle state of a [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorState {
    /// Fresh or reset; nothing computed yet.
    Idle,
    /// An input changed and has not been validated.
    Editing,
    /// Inputs validated, result pending.
    Validated,
    /// Result matches the current inputs.
    Computed,
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculatorState::Idle => "idle",
            CalculatorState::Editing => "editing",
            CalculatorState::Validated => "validated",
            CalculatorState::Computed => "computed",
        };
        write!(f, "{name}")
    }
}

/// An editing session for instrument `I`.
///
/// # Example
///
/// ```rust
/// use nivesh_core::ParamId;
/// use nivesh_engine::{Calculator, CalculatorState, Sip};
///
/// let mut sip = Calculator::<Sip>::new();
/// assert_eq!(sip.state(), CalculatorState::Idle);
///
/// let result = sip.set(ParamId::MonthlyAmount, "").unwrap();
/// assert_eq!(sip.state(), CalculatorState::Computed);
/// assert_eq!(sip.value(ParamId::MonthlyAmount), Some(0.0));
/// assert!(sip.validation().has_errors());
/// assert_eq!(result.total_invested, 100.0 * 120.0);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<I: Instrument> {
    limits: LimitSet,
    raw: BTreeMap<ParamId, RawInput>,
    values: BTreeMap<ParamId, f64>,
    options: I::Options,
    state: CalculatorState,
    validation: ValidationReport,
    result: Option<I::Output>,
}

impl<I: Instrument> Default for Calculator<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Instrument> Calculator<I> {
    /// Creates a session with the standard limits of `I`.
    pub fn new() -> Self {
        Self::from_limits(standard_limits(I::KIND))
    }

    /// Creates a session with custom limits.
    ///
    /// The set must be consistent and hold exactly the parameters `I` reads.
    pub fn with_limits(limits: LimitSet) -> NiveshResult<Self> {
        limits.check()?;
        if let Some(extra) = limits.params().into_iter().find(|p| !I::PARAMS.contains(p)) {
            return Err(NiveshError::unknown_parameter(I::KIND, extra));
        }
        if let Some(missing) = I::PARAMS.iter().find(|p| !limits.contains(**p)) {
            return Err(NiveshError::invalid_limit(
                *missing,
                format!("{} requires a limit for this parameter", I::KIND.label()),
            ));
        }
        Ok(Self::from_limits(limits))
    }

    /// Creates a session with the limits of `I` in `config`.
    pub fn from_config(config: &LimitsConfig) -> NiveshResult<Self> {
        Self::with_limits(config.get(I::KIND).clone())
    }

    fn from_limits(limits: LimitSet) -> Self {
        let mut calculator = Self {
            limits,
            raw: BTreeMap::new(),
            values: BTreeMap::new(),
            options: I::Options::default(),
            state: CalculatorState::Idle,
            validation: ValidationReport::default(),
            result: None,
        };
        calculator.load_defaults();
        calculator
    }

    fn load_defaults(&mut self) {
        self.raw = self
            .limits
            .iter()
            .map(|(param, limit)| (param, RawInput::Number(limit.default)))
            .collect();
        self.values = self
            .limits
            .iter()
            .map(|(param, limit)| (param, limit.default))
            .collect();
        self.validation = ValidationReport::build(&self.values, &self.limits);
    }

    /// The instrument of this session.
    pub fn kind(&self) -> InstrumentKind {
        I::KIND
    }

    /// The limits in force.
    pub fn limits(&self) -> &LimitSet {
        &self.limits
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    /// Current options.
    pub fn options(&self) -> I::Options {
        self.options
    }

    /// Raw input of `param` as last entered.
    pub fn raw(&self, param: ParamId) -> Option<&RawInput> {
        self.raw.get(&param)
    }

    /// Canonical value of `param`.
    pub fn value(&self, param: ParamId) -> Option<f64> {
        self.values.get(&param).copied()
    }

    /// All canonical values.
    pub fn values(&self) -> &BTreeMap<ParamId, f64> {
        &self.values
    }

    /// Value of `param` as passed to the formula.
    pub fn safe_value(&self, param: ParamId) -> Option<f64> {
        let limit = self.limits.get(param)?;
        Some(safe_value(self.value(param).unwrap_or(0.0), limit))
    }

    /// Safe values of every parameter.
    pub fn safe_values(&self) -> BTreeMap<ParamId, f64> {
        self.limits
            .iter()
            .map(|(param, limit)| {
                let canonical = self.values.get(&param).copied().unwrap_or(0.0);
                (param, safe_value(canonical, limit))
            })
            .collect()
    }

    /// Below-minimum report for the current values.
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    /// The cached result; `None` until the session is first evaluated.
    pub fn result(&self) -> Option<&I::Output> {
        self.result.as_ref()
    }

    /// Sets `param` from raw input and recomputes.
    pub fn set(&mut self, param: ParamId, raw: impl Into<RawInput>) -> NiveshResult<I::Output> {
        self.edit(param, raw.into())?;
        Ok(self.recompute())
    }

    /// Sets several parameters, then recomputes once.
    ///
    /// Nothing is changed if any parameter is unknown.
    pub fn set_all<R: Into<RawInput>>(
        &mut self,
        inputs: impl IntoIterator<Item = (ParamId, R)>,
    ) -> NiveshResult<I::Output> {
        let inputs: Vec<(ParamId, RawInput)> =
            inputs.into_iter().map(|(param, raw)| (param, raw.into())).collect();
        if let Some((param, _)) = inputs.iter().find(|(p, _)| !self.limits.contains(*p)) {
            return Err(NiveshError::unknown_parameter(I::KIND, *param));
        }
        for (param, raw) in inputs {
            self.edit(param, raw)?;
        }
        Ok(self.recompute())
    }

    /// Returns the session with `options` set, without computing.
    ///
    /// A computed result becomes stale and is recomputed on the next
    /// [`evaluate`](Self::evaluate).
    #[must_use]
    pub fn with_options(mut self, options: I::Options) -> Self {
        self.options = options;
        if self.state != CalculatorState::Idle {
            self.state = CalculatorState::Editing;
        }
        self
    }

    /// Replaces the options and recomputes.
    pub fn set_options(&mut self, options: I::Options) -> I::Output {
        self.options = options;
        self.state = CalculatorState::Editing;
        self.recompute()
    }

    /// Computes the result if the session is idle and returns it.
    pub fn evaluate(&mut self) -> I::Output {
        match self.result {
            Some(result) if self.state == CalculatorState::Computed => result,
            _ => self.recompute(),
        }
    }

    /// Snapshot of inputs, safe values, validation and result.
    pub fn evaluation(&mut self) -> Evaluation {
        let result = self.evaluate().into();
        Evaluation {
            kind: I::KIND,
            inputs: self.values.clone(),
            safe: self.safe_values(),
            validation: self.validation.clone(),
            result,
        }
    }

    /// Restores the defaults and options and returns to [`CalculatorState::Idle`].
    pub fn reset(&mut self) {
        self.options = I::Options::default();
        self.result = None;
        self.state = CalculatorState::Idle;
        self.load_defaults();
        tracing::debug!(instrument = %I::KIND, "session reset");
    }

    fn edit(&mut self, param: ParamId, raw: RawInput) -> NiveshResult<()> {
        let limit = self
            .limits
            .get(param)
            .ok_or_else(|| NiveshError::unknown_parameter(I::KIND, param))?;
        let canonical = canonicalize(&raw, limit.max);
        self.state = CalculatorState::Editing;
        self.values.insert(param, canonical);
        self.raw.insert(param, raw);
        Ok(())
    }

    fn recompute(&mut self) -> I::Output {
        self.validation = ValidationReport::build(&self.values, &self.limits);
        self.state = CalculatorState::Validated;

        let safe = self.safe_values();
        let substituted = safe
            .iter()
            .any(|(param, value)| self.values.get(param) != Some(value));
        let output = I::compute(&safe, self.options);
        self.state = CalculatorState::Computed;

        tracing::debug!(
            instrument = %I::KIND,
            state = %self.state,
            substituted,
            errors = self.validation.has_errors(),
            "recomputed"
        );
        self.result = Some(output);
        output
    }
}

impl<I: Instrument> Calculator<I>
where
    I::Options: Cycle,
{
    /// Advances the frequency to the next in its cycle and recomputes.
    pub fn cycle_frequency(&mut self) -> I::Output {
        let next = self.options.next();
        self.set_options(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{CompoundInterest, Gratuity, Nsc, Sip, Swp};
    use approx::assert_relative_eq;
    use nivesh_core::types::{CompoundingFrequency, Limit, NscFrequency};

    #[test]
    fn test_with_options_defers_computation() {
        let calc =
            Calculator::<CompoundInterest>::new().with_options(CompoundingFrequency::Quarterly);
        assert_eq!(calc.state(), CalculatorState::Idle);
        assert!(calc.result().is_none());

        let mut calc = calc;
        assert_eq!(calc.evaluate().n, 4);
        let mut calc = calc.with_options(CompoundingFrequency::Yearly);
        assert_eq!(calc.state(), CalculatorState::Editing);
        assert_eq!(calc.evaluate().n, 1);
        assert_eq!(calc.state(), CalculatorState::Computed);
    }

    #[test]
    fn test_new_session_is_idle_with_defaults() {
        let calc = Calculator::<Gratuity>::new();
        assert_eq!(calc.state(), CalculatorState::Idle);
        assert!(calc.result().is_none());
        assert_eq!(calc.value(ParamId::MonthlySalary), Some(60_000.0));
        assert_eq!(calc.value(ParamId::YearsOfService), Some(20.0));
        assert!(!calc.validation().has_errors());
    }

    #[test]
    fn test_evaluate_moves_to_computed() {
        let mut calc = Calculator::<Gratuity>::new();
        let result = calc.evaluate();
        assert_eq!(calc.state(), CalculatorState::Computed);
        assert_eq!(result.gratuity_capped, 692_308.0);
        assert_eq!(calc.result(), Some(&result));
    }

    #[test]
    fn test_set_recomputes() {
        let mut calc = Calculator::<Gratuity>::new();
        let result = calc.set(ParamId::MonthlySalary, "50000").unwrap();
        assert_eq!(calc.state(), CalculatorState::Computed);
        assert_eq!(result.gratuity_capped, 576_923.0);
        assert!(!result.capped);

        let result = calc.set(ParamId::YearsOfService, 50.0).unwrap();
        assert!(result.capped);
        assert_eq!(result.gratuity_capped, 1_000_000.0);
    }

    #[test]
    fn test_unknown_parameter_is_an_error() {
        let mut calc = Calculator::<Gratuity>::new();
        let err = calc.set(ParamId::AnnualRate, "8").unwrap_err();
        assert_eq!(
            err,
            NiveshError::UnknownParameter {
                instrument: InstrumentKind::Gratuity,
                param: ParamId::AnnualRate,
            }
        );
        assert_eq!(calc.state(), CalculatorState::Idle);
    }

    #[test]
    fn test_set_all_is_atomic() {
        let mut calc = Calculator::<Sip>::new();
        let result = calc.set_all([(ParamId::Years, "5"), (ParamId::Age, "30")]);
        assert!(result.is_err());
        assert_eq!(calc.value(ParamId::Years), Some(10.0));
    }

    #[test]
    fn test_below_minimum_substitutes_safe_value() {
        let mut calc = Calculator::<Sip>::new();
        let result = calc.set(ParamId::MonthlyAmount, "50").unwrap();
        assert_eq!(calc.value(ParamId::MonthlyAmount), Some(50.0));
        assert_eq!(calc.safe_value(ParamId::MonthlyAmount), Some(100.0));

        let check = calc.validation().get(ParamId::MonthlyAmount).unwrap();
        assert!(check.error);
        assert_eq!(check.message, "Minimum value is 100");
        assert_relative_eq!(result.total_invested, 12_000.0);
    }

    #[test]
    fn test_ceiling_clamps_canonical_value() {
        let mut calc = Calculator::<Sip>::new();
        calc.set(ParamId::Years, "75").unwrap();
        assert_eq!(calc.value(ParamId::Years), Some(40.0));
        assert_eq!(calc.result().unwrap().months, 480);
    }

    #[test]
    fn test_cycle_frequency() {
        let mut calc = Calculator::<CompoundInterest>::new();
        assert_eq!(calc.cycle_frequency().n, 2);
        assert_eq!(calc.options(), CompoundingFrequency::HalfYearly);
        assert_eq!(calc.cycle_frequency().n, 4);
        assert_eq!(calc.cycle_frequency().n, 1);

        let mut nsc = Calculator::<Nsc>::new();
        assert_eq!(nsc.cycle_frequency().n, 2);
        assert_eq!(nsc.options(), NscFrequency::HalfYearly);
        assert_eq!(nsc.cycle_frequency().n, 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut calc = Calculator::<CompoundInterest>::new();
        calc.set(ParamId::Principal, "").unwrap();
        calc.cycle_frequency();
        calc.reset();
        assert_eq!(calc.state(), CalculatorState::Idle);
        assert!(calc.result().is_none());
        assert_eq!(calc.value(ParamId::Principal), Some(100_000.0));
        assert_eq!(calc.options(), CompoundingFrequency::Yearly);
        assert!(!calc.validation().has_errors());
    }

    #[test]
    fn test_with_limits_checks_parameters() {
        let missing = LimitSet::builder()
            .param(ParamId::Investment, Limit::new(0.0, 1_000.0))
            .build()
            .unwrap();
        assert!(matches!(
            Calculator::<Swp>::with_limits(missing),
            Err(NiveshError::InvalidLimit { .. })
        ));

        let extra = standard_limits(InstrumentKind::Gratuity)
            .with_limit(ParamId::Age, Limit::new(18.0, 30.0))
            .unwrap();
        assert!(matches!(
            Calculator::<Gratuity>::with_limits(extra),
            Err(NiveshError::UnknownParameter { param: ParamId::Age, .. })
        ));
    }

    #[test]
    fn test_custom_limits_change_defaults() {
        let limits = standard_limits(InstrumentKind::Sip)
            .with_limit(ParamId::Years, Limit::new(1.0, 3.0).with_max(5.0))
            .unwrap();
        let mut calc = Calculator::<Sip>::with_limits(limits).unwrap();
        assert_eq!(calc.evaluate().months, 36);
    }

    #[test]
    fn test_evaluation_snapshot() {
        let mut calc = Calculator::<Swp>::new();
        calc.set(ParamId::Withdrawal, "0").unwrap();
        let evaluation = calc.evaluation();
        assert_eq!(evaluation.kind, InstrumentKind::Swp);
        assert_eq!(evaluation.inputs[&ParamId::Withdrawal], 0.0);
        assert_eq!(evaluation.safe[&ParamId::Withdrawal], 500.0);
        assert!(evaluation.validation.has_errors());
    }
}
