//! The [`Instrument`] trait and its eight implementations.
//!
//! An instrument binds an [`InstrumentKind`] to the parameters it reads, the
//! options it takes and the formula it runs. The implementations are unit
//! structs used as type parameters of [`Calculator`](crate::Calculator).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use nivesh_calc::{
    compute_compound_interest, compute_gratuity, compute_lumpsum, compute_nps, compute_nsc,
    compute_ppf, compute_sip, compute_swp, CompoundInterestResult, GratuityResult, LumpsumResult,
    NpsResult, NscResult, PpfResult, SipResult, SwpResult, NSC_TENURE_YEARS,
};
use nivesh_core::types::{CompoundingFrequency, InstrumentKind, NscFrequency, ParamId};

use crate::dispatch::CalculationResult;

/// A savings instrument: its parameters, options and formula.
pub trait Instrument {
    /// Discriminator of this instrument.
    const KIND: InstrumentKind;

    /// Parameters the formula reads.
    const PARAMS: &'static [ParamId];

    /// Non-numeric options, such as the compounding frequency.
    type Options: Copy + Default + PartialEq + fmt::Debug;

    /// The formula's result record.
    type Output: Copy + PartialEq + fmt::Debug + Serialize + Into<CalculationResult>;

    /// Runs the formula on safe values.
    fn compute(values: &BTreeMap<ParamId, f64>, options: Self::Options) -> Self::Output;
}

fn get(values: &BTreeMap<ParamId, f64>, param: ParamId) -> f64 {
    values.get(&param).copied().unwrap_or(0.0)
}

/// Systematic Investment Plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sip;

impl Instrument for Sip {
    const KIND: InstrumentKind = InstrumentKind::Sip;
    const PARAMS: &'static [ParamId] =
        &[ParamId::MonthlyAmount, ParamId::AnnualRate, ParamId::Years];
    type Options = ();
    type Output = SipResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> SipResult {
        compute_sip(
            get(values, ParamId::MonthlyAmount),
            get(values, ParamId::AnnualRate),
            get(values, ParamId::Years),
        )
    }
}

/// Single upfront investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lumpsum;

impl Instrument for Lumpsum {
    const KIND: InstrumentKind = InstrumentKind::Lumpsum;
    const PARAMS: &'static [ParamId] = &[ParamId::Principal, ParamId::AnnualRate, ParamId::Years];
    type Options = ();
    type Output = LumpsumResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> LumpsumResult {
        compute_lumpsum(
            get(values, ParamId::Principal),
            get(values, ParamId::AnnualRate),
            get(values, ParamId::Years),
        )
    }
}

/// Compound interest with a selectable frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompoundInterest;

impl Instrument for CompoundInterest {
    const KIND: InstrumentKind = InstrumentKind::CompoundInterest;
    const PARAMS: &'static [ParamId] = &[ParamId::Principal, ParamId::AnnualRate, ParamId::Years];
    type Options = CompoundingFrequency;
    type Output = CompoundInterestResult;

    fn compute(
        values: &BTreeMap<ParamId, f64>,
        frequency: CompoundingFrequency,
    ) -> CompoundInterestResult {
        compute_compound_interest(
            get(values, ParamId::Principal),
            get(values, ParamId::AnnualRate),
            get(values, ParamId::Years),
            frequency,
        )
    }
}

/// Statutory gratuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gratuity;

impl Instrument for Gratuity {
    const KIND: InstrumentKind = InstrumentKind::Gratuity;
    const PARAMS: &'static [ParamId] = &[ParamId::MonthlySalary, ParamId::YearsOfService];
    type Options = ();
    type Output = GratuityResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> GratuityResult {
        compute_gratuity(
            get(values, ParamId::MonthlySalary),
            get(values, ParamId::YearsOfService),
        )
    }
}

/// National Pension System.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nps;

impl Instrument for Nps {
    const KIND: InstrumentKind = InstrumentKind::Nps;
    const PARAMS: &'static [ParamId] = &[
        ParamId::MonthlyAmount,
        ParamId::AnnualRate,
        ParamId::Age,
        ParamId::RetirementAge,
    ];
    type Options = ();
    type Output = NpsResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> NpsResult {
        compute_nps(
            get(values, ParamId::MonthlyAmount),
            get(values, ParamId::AnnualRate),
            get(values, ParamId::Age),
            get(values, ParamId::RetirementAge),
        )
    }
}

/// National Savings Certificate. The tenure is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nsc;

impl Instrument for Nsc {
    const KIND: InstrumentKind = InstrumentKind::Nsc;
    const PARAMS: &'static [ParamId] = &[ParamId::Principal, ParamId::AnnualRate];
    type Options = NscFrequency;
    type Output = NscResult;

    fn compute(values: &BTreeMap<ParamId, f64>, frequency: NscFrequency) -> NscResult {
        compute_nsc(
            get(values, ParamId::Principal),
            get(values, ParamId::AnnualRate),
            NSC_TENURE_YEARS,
            frequency,
        )
    }
}

/// Public Provident Fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ppf;

impl Instrument for Ppf {
    const KIND: InstrumentKind = InstrumentKind::Ppf;
    const PARAMS: &'static [ParamId] =
        &[ParamId::YearlyInvestment, ParamId::Years, ParamId::AnnualRate];
    type Options = ();
    type Output = PpfResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> PpfResult {
        compute_ppf(
            get(values, ParamId::YearlyInvestment),
            get(values, ParamId::Years),
            get(values, ParamId::AnnualRate),
        )
    }
}

/// Systematic Withdrawal Plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Swp;

impl Instrument for Swp {
    const KIND: InstrumentKind = InstrumentKind::Swp;
    const PARAMS: &'static [ParamId] = &[
        ParamId::Investment,
        ParamId::Withdrawal,
        ParamId::AnnualRate,
        ParamId::Years,
    ];
    type Options = ();
    type Output = SwpResult;

    fn compute(values: &BTreeMap<ParamId, f64>, (): ()) -> SwpResult {
        compute_swp(
            get(values, ParamId::Investment),
            get(values, ParamId::Withdrawal),
            get(values, ParamId::AnnualRate),
            get(values, ParamId::Years),
        )
    }
}
