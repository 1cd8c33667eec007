//! Systematic Withdrawal Plan.
//!
//! A fixed amount is withdrawn every month from a compounding balance. A fixed
//! currency withdrawal has no closed form, so the plan is simulated month by
//! month. Each month, in this order:
//!
//! 1. the balance grows by the effective monthly rate and is rounded to cents;
//! 2. the withdrawal, rounded to whole units, is subtracted;
//! 3. the withdrawal is added to the running total.
//!
//! The balance is not floored at zero. A negative final value means the fund
//! was exhausted before the horizon ended. Horizons longer than
//! [`SWP_MAX_MONTHS`] are truncated to it.

use serde::{Deserialize, Serialize};

use nivesh_math::rates::annual_to_monthly_effective;
use nivesh_math::rounding::{round_half_up, round_to_cents};

use crate::{finite_rate, months_in, non_negative};

/// Longest simulated horizon, in months.
pub const SWP_MAX_MONTHS: u32 = 360;

/// Outcome of a withdrawal plan. Monetary fields are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpResult {
    /// Initial corpus.
    pub invested_amount: f64,
    /// Sum of all withdrawals.
    pub total_withdrawal: f64,
    /// Balance after the last withdrawal; may be negative.
    pub final_value: f64,
}

/// One month of the withdrawal ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpMonth {
    /// 1-based month.
    pub month: u32,
    /// Balance at the start of the month.
    pub opening: f64,
    /// Growth credited this month, after rounding to cents.
    pub growth: f64,
    /// Amount withdrawn.
    pub withdrawal: f64,
    /// Balance after the withdrawal.
    pub closing: f64,
}

/// Simulates withdrawing `withdrawal` every month from `investment` growing at
/// `rate` percent per annum, for `years`.
pub fn compute_swp(investment: f64, withdrawal: f64, rate: f64, years: f64) -> SwpResult {
    let mut total_withdrawal = 0.0;
    let final_balance = simulate(investment, withdrawal, rate, years, |month| {
        total_withdrawal += month.withdrawal;
    });

    SwpResult {
        invested_amount: round_half_up(non_negative(investment)),
        total_withdrawal,
        final_value: round_half_up(final_balance),
    }
}

/// The month-by-month ledger of [`compute_swp`].
pub fn swp_schedule(investment: f64, withdrawal: f64, rate: f64, years: f64) -> Vec<SwpMonth> {
    let mut ledger = Vec::with_capacity(horizon(years) as usize);
    simulate(investment, withdrawal, rate, years, |month| ledger.push(month));
    ledger
}

fn horizon(years: f64) -> u32 {
    months_in(years).min(SWP_MAX_MONTHS)
}

/// Runs the simulation, reporting every month to `visit`. Returns the final
/// balance before whole-unit rounding.
fn simulate(
    investment: f64,
    withdrawal: f64,
    rate: f64,
    years: f64,
    mut visit: impl FnMut(SwpMonth),
) -> f64 {
    let monthly_rate = annual_to_monthly_effective(finite_rate(rate));
    let withdrawal = round_half_up(non_negative(withdrawal));
    let mut balance = non_negative(investment);

    for month in 1..=horizon(years) {
        let opening = balance;
        let grown = round_to_cents(opening * (1.0 + monthly_rate));
        balance = grown - withdrawal;
        visit(SwpMonth {
            month,
            opening,
            growth: grown - opening,
            withdrawal,
            closing: balance,
        });
    }

    balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_linear() {
        let r = compute_swp(100_000.0, 1_000.0, 0.0, 5.0);
        assert_eq!(r.invested_amount, 100_000.0);
        assert_eq!(r.total_withdrawal, 60_000.0);
        assert_eq!(r.final_value, 40_000.0);
    }

    #[test]
    fn test_growth_then_withdraw_order() {
        // One month: 1000 grows first, then 100 leaves.
        let ledger = swp_schedule(1_000.0, 100.0, 12.0, 1.0 / 12.0);
        assert_eq!(ledger.len(), 1);
        let m = ledger[0];
        let i = 1.12f64.powf(1.0 / 12.0) - 1.0;
        assert_eq!(m.opening, 1_000.0);
        assert_eq!(m.opening + m.growth, round_to_cents(1_000.0 * (1.0 + i)));
        assert_eq!(m.closing, round_to_cents(1_000.0 * (1.0 + i)) - 100.0);
    }

    #[test]
    fn test_depletion_goes_negative() {
        let r = compute_swp(10_000.0, 5_000.0, 8.0, 1.0);
        assert!(r.final_value < 0.0);
        assert_eq!(r.total_withdrawal, 60_000.0);
    }

    #[test]
    fn test_withdrawal_is_rounded() {
        let r = compute_swp(50_000.0, 999.6, 0.0, 1.0);
        assert_eq!(r.total_withdrawal, 12_000.0);
        assert_eq!(r.final_value, 38_000.0);
    }

    #[test]
    fn test_deterministic() {
        let a = compute_swp(500_000.0, 10_000.0, 8.0, 30.0);
        let b = compute_swp(500_000.0, 10_000.0, 8.0, 30.0);
        assert_eq!(a.final_value.to_bits(), b.final_value.to_bits());
        assert_eq!(a.total_withdrawal.to_bits(), b.total_withdrawal.to_bits());
    }

    #[test]
    fn test_schedule_matches_result() {
        let ledger = swp_schedule(500_000.0, 10_000.0, 8.0, 5.0);
        let result = compute_swp(500_000.0, 10_000.0, 8.0, 5.0);
        assert_eq!(ledger.len(), 60);
        assert_eq!(round_half_up(ledger[59].closing), result.final_value);
        assert!(ledger.windows(2).all(|w| w[0].closing == w[1].opening));
    }

    #[test]
    fn test_horizon_is_bounded() {
        let capped = compute_swp(1_000.0, 10.0, 8.0, 1e6);
        let longest = compute_swp(1_000.0, 10.0, 8.0, 30.0);
        assert!(capped.final_value.is_finite());
        assert_eq!(capped, longest);
        assert_eq!(capped.total_withdrawal, 3_600.0);

        let ledger = swp_schedule(1_000.0, 10.0, 8.0, 1e12);
        assert_eq!(ledger.len(), SWP_MAX_MONTHS as usize);
    }

    #[test]
    fn test_zero_investment() {
        let r = compute_swp(0.0, 0.0, 8.0, 5.0);
        assert_eq!(r.invested_amount, 0.0);
        assert_eq!(r.total_withdrawal, 0.0);
        assert_eq!(r.final_value, 0.0);
    }
}
