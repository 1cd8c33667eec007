//! Compound interest with a selectable compounding frequency.
//!
//! The annual rate is split nominally across the periods of a year:
//!
//! ```text
//! A = P × (1 + r / n)^(n × t)
//! ```

use serde::{Deserialize, Serialize};

use nivesh_core::types::CompoundingFrequency;
use nivesh_math::growth::compound_amount;
use nivesh_math::rounding::round_half_up;

use crate::non_negative;

/// Result of a compound-interest projection. Monetary fields are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// The principal.
    pub invested_amount: f64,
    /// Interest earned over the horizon.
    pub estimated_returns: f64,
    /// Principal plus interest.
    pub total_amount: f64,
    /// Compounding periods per year.
    pub n: u32,
}

/// Projects `principal` at `rate` percent for `years`, compounded at
/// `frequency`.
///
/// If any of principal, rate or years is not positive the principal is
/// returned unchanged with zero interest.
pub fn compute_compound_interest(
    principal: f64,
    rate: f64,
    years: f64,
    frequency: CompoundingFrequency,
) -> CompoundInterestResult {
    let n = frequency.periods_per_year();
    let (invested_amount, estimated_returns, total_amount) = project(principal, rate, years, n);
    CompoundInterestResult {
        invested_amount,
        estimated_returns,
        total_amount,
        n,
    }
}

/// Shared by compound interest and NSC: `(invested, interest, total)`, all
/// rounded. Interest is derived from the rounded totals so the three always
/// add up.
pub(crate) fn project(
    principal: f64,
    rate: f64,
    years: f64,
    periods_per_year: u32,
) -> (f64, f64, f64) {
    let principal = non_negative(principal);
    let invested = round_half_up(principal);
    if principal <= 0.0 || non_negative(rate) <= 0.0 || non_negative(years) <= 0.0 {
        return (invested, 0.0, invested);
    }

    let total = round_half_up(compound_amount(principal, rate, periods_per_year, years));
    (invested, total - invested, total)
}
