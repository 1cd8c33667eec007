//! Standard limit sets.
//!
//! These are the ranges and starting values every calculator ships with. A
//! limits file only needs to mention what it changes.

use nivesh_core::types::{InstrumentKind, Limit, LimitSet, ParamId, Precision};

/// Longest SWP horizon a limit set may allow, in years.
pub const SWP_MAX_YEARS: f64 = 30.0;

/// Longest horizon any other time parameter may allow, in years.
pub const MAX_HORIZON_YEARS: f64 = 100.0;

const RATE: Precision = Precision::Decimals(2);

fn rate(min: f64, default: f64, max: f64) -> Limit {
    Limit::new(min, default).with_max(max).with_precision(RATE)
}

fn whole(min: f64, default: f64, max: f64) -> Limit {
    Limit::new(min, default).with_max(max)
}

/// Returns the standard limit set of `kind`.
pub fn standard_limits(kind: InstrumentKind) -> LimitSet {
    match kind {
        InstrumentKind::Sip => [
            (ParamId::MonthlyAmount, whole(100.0, 25_000.0, 10_000_000.0)),
            (ParamId::AnnualRate, rate(1.0, 12.0, 30.0)),
            (ParamId::Years, whole(1.0, 10.0, 40.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Lumpsum => [
            (ParamId::Principal, whole(500.0, 100_000.0, 10_000_000.0)),
            (ParamId::AnnualRate, rate(1.0, 12.0, 30.0)),
            (ParamId::Years, whole(1.0, 10.0, 40.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::CompoundInterest => [
            (ParamId::Principal, whole(1_000.0, 100_000.0, 10_000_000.0)),
            (ParamId::AnnualRate, rate(1.0, 10.0, 50.0)),
            (ParamId::Years, whole(1.0, 5.0, 30.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Gratuity => [
            (ParamId::MonthlySalary, whole(1_000.0, 60_000.0, 10_000_000.0)),
            (ParamId::YearsOfService, whole(5.0, 20.0, 50.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Nps => [
            (ParamId::MonthlyAmount, whole(500.0, 5_000.0, 150_000.0)),
            (ParamId::AnnualRate, rate(8.0, 10.0, 15.0)),
            (ParamId::Age, whole(18.0, 30.0, 60.0)),
            (ParamId::RetirementAge, whole(60.0, 60.0, 75.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Nsc => [
            (ParamId::Principal, whole(1_000.0, 100_000.0, 10_000_000.0)),
            (ParamId::AnnualRate, rate(1.0, 7.7, 15.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Ppf => [
            (ParamId::YearlyInvestment, whole(500.0, 150_000.0, 150_000.0)),
            (ParamId::Years, whole(15.0, 15.0, 50.0)),
            (ParamId::AnnualRate, rate(1.0, 7.1, 15.0)),
        ]
        .into_iter()
        .collect(),
        InstrumentKind::Swp => [
            (ParamId::Investment, whole(10_000.0, 500_000.0, 50_000_000.0)),
            (ParamId::Withdrawal, whole(500.0, 10_000.0, 1_000_000.0)),
            (ParamId::AnnualRate, rate(1.0, 8.0, 30.0)),
            (ParamId::Years, whole(1.0, 5.0, SWP_MAX_YEARS)),
        ]
        .into_iter()
        .collect(),
    }
}
