//! Systematic Investment Plan.
//!
//! A fixed amount is invested at the start of every month. The annual return
//! is converted to an effective monthly rate, so twelve months of compounding
//! reproduce the quoted annual figure:
//!
//! ```text
//! i        = (1 + r)^(1/12) − 1
//! n        = round(years × 12)
//! maturity = P × [((1 + i)^n − 1) / i] × (1 + i)      (P × n when i = 0)
//! ```
//!
//! Values are returned unrounded; use [`SipResult::rounded`] for display.

use serde::{Deserialize, Serialize};

use nivesh_math::growth::annuity_due_future_value;
use nivesh_math::rates::annual_to_monthly_effective;
use nivesh_math::rounding::round_half_up;

use crate::{finite_rate, months_in, non_negative};

/// Projection of a SIP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    /// Corpus at the end of the horizon.
    pub maturity: f64,
    /// Sum of all contributions.
    pub total_invested: f64,
    /// `maturity − total_invested`.
    pub gain: f64,
    /// Effective monthly rate used.
    pub monthly_rate: f64,
    /// Number of monthly contributions.
    pub months: u32,
}

impl SipResult {
    /// Returns a copy with the monetary fields rounded to whole units.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let maturity = round_half_up(self.maturity);
        let total_invested = round_half_up(self.total_invested);
        Self {
            maturity,
            total_invested,
            gain: maturity - total_invested,
            ..*self
        }
    }
}

/// Projects a monthly SIP of `amount` at `annual_return` percent for `years`.
pub fn compute_sip(amount: f64, annual_return: f64, years: f64) -> SipResult {
    let amount = non_negative(amount);
    let monthly_rate = annual_to_monthly_effective(finite_rate(annual_return));
    let months = months_in(years);

    let maturity = annuity_due_future_value(amount, monthly_rate, f64::from(months));
    let total_invested = amount * f64::from(months);

    SipResult {
        maturity,
        total_invested,
        gain: maturity - total_invested,
        monthly_rate,
        months,
    }
}

/// Value of a SIP at the end of one year of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipYear {
    /// 1-based year; the last entry may cover a partial year.
    pub year: u32,
    /// Months elapsed at this point.
    pub months: u32,
    /// Contributions to date.
    pub invested: f64,
    /// Corpus to date.
    pub value: f64,
}

/// Year-by-year growth of the SIP described by [`compute_sip`].
///
/// The last entry always equals the full-horizon maturity.
pub fn sip_schedule(amount: f64, annual_return: f64, years: f64) -> Vec<SipYear> {
    let amount = non_negative(amount);
    let monthly_rate = annual_to_monthly_effective(finite_rate(annual_return));
    let total_months = months_in(years);

    let mut boundaries: Vec<u32> = (12..=total_months).step_by(12).collect();
    if total_months % 12 != 0 {
        boundaries.push(total_months);
    }

    boundaries
        .into_iter()
        .map(|months| SipYear {
            year: months.div_ceil(12),
            months,
            invested: amount * f64::from(months),
            value: annuity_due_future_value(amount, monthly_rate, f64::from(months)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_case() {
        let r = compute_sip(25_000.0, 12.0, 10.0);
        assert_eq!(r.months, 120);
        assert_relative_eq!(r.monthly_rate, 0.009_489, epsilon = 1e-6);
        assert_eq!(r.total_invested, 3_000_000.0);

        let i = 1.12f64.powf(1.0 / 12.0) - 1.0;
        let expected = 25_000.0 * ((1.0 + i).powi(120) - 1.0) / i * (1.0 + i);
        assert_relative_eq!(r.maturity, expected, max_relative = 1e-12);
        assert_relative_eq!(r.gain, expected - 3_000_000.0, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let r = compute_sip(1_000.0, 0.0, 2.0);
        assert_eq!(r.monthly_rate, 0.0);
        assert_eq!(r.maturity, 24_000.0);
        assert_eq!(r.gain, 0.0);
    }

    #[test]
    fn test_negative_rate_loses_value() {
        let r = compute_sip(1_000.0, -10.0, 5.0);
        let i = 0.9f64.powf(1.0 / 12.0) - 1.0;
        assert_relative_eq!(r.monthly_rate, i, max_relative = 1e-12);
        assert!(r.maturity < r.total_invested);
        assert!(r.gain < 0.0);
    }

    #[test]
    fn test_zero_amount() {
        let r = compute_sip(0.0, 12.0, 10.0);
        assert_eq!(r.maturity, 0.0);
        assert_eq!(r.total_invested, 0.0);
        assert_eq!(r.gain, 0.0);
    }

    #[test]
    fn test_fractional_years_round_months() {
        assert_eq!(compute_sip(100.0, 10.0, 1.5).months, 18);
        assert_eq!(compute_sip(100.0, 10.0, 0.04).months, 0);
        assert_eq!(compute_sip(100.0, 10.0, -3.0).months, 0);
    }

    #[test]
    fn test_rounded() {
        let r = compute_sip(25_000.0, 12.0, 10.0).rounded();
        assert_eq!(r.maturity.fract(), 0.0);
        assert_eq!(r.gain, r.maturity - r.total_invested);
        assert_eq!(r.months, 120);
    }

    #[test]
    fn test_schedule_ends_at_maturity() {
        let schedule = sip_schedule(5_000.0, 12.0, 2.5);
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].months, 12);
        assert_eq!(schedule[2].months, 30);
        assert_eq!(schedule[2].year, 3);
        let full = compute_sip(5_000.0, 12.0, 2.5);
        assert_relative_eq!(schedule[2].value, full.maturity, max_relative = 1e-12);
        assert!(schedule.windows(2).all(|w| w[0].value < w[1].value));
    }
}
