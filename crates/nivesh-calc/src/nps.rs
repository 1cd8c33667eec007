//! National Pension System.
//!
//! Monthly contributions until retirement, compounding at the nominal monthly
//! rate `r / 12`, modelled as an annuity-due. At exit a fixed share of the
//! corpus must buy an annuity.

use serde::{Deserialize, Serialize};

use nivesh_math::growth::annuity_due_future_value;
use nivesh_math::rates::nominal_periodic_rate;
use nivesh_math::rounding::round_half_up;

use crate::{finite_rate, non_negative};

/// Share of the maturity corpus that must be annuitised.
pub const MIN_ANNUITY_SHARE: f64 = 0.4;

/// Result of an NPS projection. Monetary fields are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpsResult {
    /// Sum of all contributions.
    pub total_investment: f64,
    /// `maturity_amount − total_investment`.
    pub interest_earned: f64,
    /// Corpus at retirement.
    pub maturity_amount: f64,
    /// Minimum amount to be used for an annuity purchase.
    pub min_annuity_investment: f64,
    /// `max(0, retirement_age − age)`.
    pub tenure_years: f64,
    /// Number of monthly contributions.
    pub total_months: f64,
}

/// Projects an NPS account funded with `monthly_investment` from `age` to
/// `retirement_age` at `annual_return` percent.
pub fn compute_nps(
    monthly_investment: f64,
    annual_return: f64,
    age: f64,
    retirement_age: f64,
) -> NpsResult {
    let payment = non_negative(monthly_investment);
    let tenure_years = non_negative(retirement_age - age);
    let total_months = tenure_years * 12.0;
    let monthly_rate = nominal_periodic_rate(finite_rate(annual_return), 12);

    let maturity = annuity_due_future_value(payment, monthly_rate, total_months);
    let total_investment = round_half_up(payment * total_months);
    let maturity_amount = round_half_up(maturity);

    NpsResult {
        total_investment,
        interest_earned: maturity_amount - total_investment,
        maturity_amount,
        min_annuity_investment: round_half_up(maturity * MIN_ANNUITY_SHARE),
        tenure_years,
        total_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_thirty_years_to_retirement() {
        let r = compute_nps(5_000.0, 10.0, 30.0, 60.0);
        assert_eq!(r.tenure_years, 30.0);
        assert_eq!(r.total_months, 360.0);
        assert_eq!(r.total_investment, 1_800_000.0);

        let i: f64 = 0.10 / 12.0;
        let expected = 5_000.0 * ((1.0 + i).powi(360) - 1.0) / i * (1.0 + i);
        assert_relative_eq!(r.maturity_amount, expected.round(), epsilon = 1.0);
        assert_eq!(r.interest_earned, r.maturity_amount - r.total_investment);
        assert_relative_eq!(r.min_annuity_investment, (expected * 0.4).round(), epsilon = 1.0);
    }

    #[test]
    fn test_past_retirement_age_is_empty() {
        let r = compute_nps(5_000.0, 10.0, 65.0, 60.0);
        assert_eq!(r.tenure_years, 0.0);
        assert_eq!(r.total_months, 0.0);
        assert_eq!(r.maturity_amount, 0.0);
        assert_eq!(r.min_annuity_investment, 0.0);
    }

    #[test]
    fn test_zero_rate() {
        let r = compute_nps(1_000.0, 0.0, 50.0, 60.0);
        assert_eq!(r.maturity_amount, 120_000.0);
        assert_eq!(r.interest_earned, 0.0);
        assert_eq!(r.min_annuity_investment, 48_000.0);
    }
}
