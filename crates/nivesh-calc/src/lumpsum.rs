//! One-time investment compounding annually.

use serde::{Deserialize, Serialize};

use nivesh_math::growth::growth_factor;
use nivesh_math::rounding::round_half_up;

use crate::{finite_rate, non_negative};

/// Projection of a lumpsum investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpsumResult {
    /// Value at the end of the horizon.
    pub maturity: f64,
    /// The principal.
    pub total_invested: f64,
    /// `maturity − total_invested`.
    pub gain: f64,
}

impl LumpsumResult {
    /// Returns a copy with every field rounded to whole units.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let maturity = round_half_up(self.maturity);
        let total_invested = round_half_up(self.total_invested);
        Self {
            maturity,
            total_invested,
            gain: maturity - total_invested,
        }
    }
}

/// Projects `principal` growing at `annual_return` percent for `years`:
/// `maturity = P × (1 + r)^years`.
pub fn compute_lumpsum(principal: f64, annual_return: f64, years: f64) -> LumpsumResult {
    let principal = non_negative(principal);
    let rate = finite_rate(annual_return) / 100.0;
    let maturity = principal * growth_factor(rate, non_negative(years));
    LumpsumResult {
        maturity,
        total_invested: principal,
        gain: maturity - principal,
    }
}

/// Value of a lumpsum at the end of one year of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpsumYear {
    /// 1-based year; the last entry may cover a partial year.
    pub year: u32,
    /// Value at this point.
    pub value: f64,
}

/// Year-by-year value of the investment described by [`compute_lumpsum`].
pub fn lumpsum_schedule(principal: f64, annual_return: f64, years: f64) -> Vec<LumpsumYear> {
    let principal = non_negative(principal);
    let rate = finite_rate(annual_return) / 100.0;
    let years = non_negative(years);

    let whole = years.floor() as u32;
    let mut schedule: Vec<LumpsumYear> = (1..=whole)
        .map(|year| LumpsumYear {
            year,
            value: principal * growth_factor(rate, f64::from(year)),
        })
        .collect();
    if years.fract() > 0.0 {
        schedule.push(LumpsumYear {
            year: whole + 1,
            value: principal * growth_factor(rate, years),
        });
    }
    schedule
}
