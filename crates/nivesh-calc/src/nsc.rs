//! National Savings Certificate.
//!
//! Same compounding form as [`compute_compound_interest`](crate::compute_compound_interest),
//! restricted to yearly or half-yearly compounding. The tenure is fixed by the
//! instrument; callers pass [`NSC_TENURE_YEARS`].

use serde::{Deserialize, Serialize};

use nivesh_core::types::NscFrequency;

use crate::compound::project;
use crate::non_negative;

/// Lock-in period of an NSC, in years.
pub const NSC_TENURE_YEARS: f64 = 5.0;

/// Result of an NSC projection. Monetary fields are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NscResult {
    /// The principal.
    pub invested_amount: f64,
    /// Interest accrued over the tenure.
    pub total_interest: f64,
    /// Maturity value.
    pub total_amount: f64,
    /// Compounding periods per year.
    pub n: u32,
    /// Tenure used.
    pub years: f64,
}

/// Projects an NSC of `principal` at `rate` percent for `years`.
pub fn compute_nsc(principal: f64, rate: f64, years: f64, frequency: NscFrequency) -> NscResult {
    let n = frequency.periods_per_year();
    let years = non_negative(years);
    let (invested_amount, total_interest, total_amount) = project(principal, rate, years, n);
    NscResult {
        invested_amount,
        total_interest,
        total_amount,
        n,
        years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yearly_standard_tenure() {
        let r = compute_nsc(100_000.0, 7.7, NSC_TENURE_YEARS, NscFrequency::Yearly);
        assert_eq!(r.n, 1);
        assert_eq!(r.years, 5.0);
        assert_eq!(r.invested_amount, 100_000.0);
        assert_relative_eq!(
            r.total_amount,
            (100_000.0 * 1.077f64.powi(5)).round(),
            epsilon = 1.0
        );
        assert_eq!(r.total_interest, r.total_amount - r.invested_amount);
    }

    #[test]
    fn test_half_yearly_earns_more() {
        let yearly = compute_nsc(50_000.0, 7.7, NSC_TENURE_YEARS, NscFrequency::Yearly);
        let half = compute_nsc(50_000.0, 7.7, NSC_TENURE_YEARS, NscFrequency::HalfYearly);
        assert_eq!(half.n, 2);
        assert!(half.total_interest > yearly.total_interest);
    }

    #[test]
    fn test_reports_tenure_used() {
        for years in [-3.0, f64::NAN, f64::INFINITY] {
            let r = compute_nsc(100_000.0, 7.7, years, NscFrequency::Yearly);
            assert_eq!(r.years, 0.0);
            assert_eq!(r.total_amount, r.invested_amount);
        }
    }

    #[test]
    fn test_zero_principal() {
        let r = compute_nsc(0.0, 7.7, NSC_TENURE_YEARS, NscFrequency::HalfYearly);
        assert_eq!(r.invested_amount, 0.0);
        assert_eq!(r.total_interest, 0.0);
        assert_eq!(r.total_amount, 0.0);
    }
}
