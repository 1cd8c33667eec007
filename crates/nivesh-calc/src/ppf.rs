//! Public Provident Fund.
//!
//! One deposit at the start of every year, compounding yearly at the
//! declared rate, modelled as an annuity-due over `years` periods.

use serde::{Deserialize, Serialize};

use nivesh_math::growth::annuity_due_future_value;
use nivesh_math::rates::nominal_periodic_rate;
use nivesh_math::rounding::round_half_up;

use crate::{finite_rate, non_negative};

/// Result of a PPF projection. Monetary fields are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpfResult {
    /// Sum of all deposits.
    pub invested_amount: f64,
    /// `maturity_value − invested_amount`.
    pub total_interest: f64,
    /// Balance at maturity.
    pub maturity_value: f64,
}

/// Projects yearly deposits of `yearly_investment` for `years` at `rate`
/// percent.
pub fn compute_ppf(yearly_investment: f64, years: f64, rate: f64) -> PpfResult {
    let deposit = non_negative(yearly_investment);
    let years = non_negative(years);
    let yearly_rate = nominal_periodic_rate(finite_rate(rate), 1);

    let invested_amount = round_half_up(deposit * years);
    let maturity_value = round_half_up(annuity_due_future_value(deposit, yearly_rate, years));

    PpfResult {
        invested_amount,
        total_interest: maturity_value - invested_amount,
        maturity_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_tenure() {
        let r = compute_ppf(150_000.0, 15.0, 7.1);
        assert_eq!(r.invested_amount, 2_250_000.0);
        let i: f64 = 0.071;
        let expected = 150_000.0 * ((1.0 + i).powi(15) - 1.0) / i * (1.0 + i);
        assert_relative_eq!(r.maturity_value, expected.round(), epsilon = 1.0);
        assert_eq!(r.total_interest, r.maturity_value - r.invested_amount);
    }

    #[test]
    fn test_three_deposits() {
        let r = compute_ppf(100.0, 3.0, 10.0);
        assert_eq!(r.maturity_value, 364.0);
        assert_eq!(r.invested_amount, 300.0);
        assert_eq!(r.total_interest, 64.0);
    }

    #[test]
    fn test_zero_deposit() {
        let r = compute_ppf(0.0, 15.0, 7.1);
        assert_eq!(r.invested_amount, 0.0);
        assert_eq!(r.total_interest, 0.0);
        assert_eq!(r.maturity_value, 0.0);
    }
}
