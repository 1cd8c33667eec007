//! Statutory gratuity.
//!
//! Fifteen days of wages per completed year of service, with a month counted
//! as 26 working days, subject to a fixed ceiling:
//!
//! ```text
//! gratuity = round(years) × salary × 15 / 26      (at most GRATUITY_CAP)
//! ```

use serde::{Deserialize, Serialize};

use nivesh_math::rounding::round_half_up;

/// Ceiling on the gratuity payable, in currency units.
pub const GRATUITY_CAP: f64 = 1_000_000.0;

/// Result of a gratuity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityResult {
    /// Years of service rounded half-up.
    pub rounded_years: f64,
    /// Gratuity before the ceiling, unrounded.
    pub gratuity_raw: f64,
    /// Gratuity payable after the ceiling, in whole units.
    pub gratuity_capped: f64,
    /// True if the ceiling reduced the payout.
    pub capped: bool,
    /// The ceiling applied.
    pub cap: f64,
}

/// Computes the gratuity for `monthly_salary` and `years_of_service`.
///
/// A non-positive salary or service length yields zero everywhere.
pub fn compute_gratuity(monthly_salary: f64, years_of_service: f64) -> GratuityResult {
    let valid = |x: f64| x.is_finite() && x > 0.0;
    if !valid(monthly_salary) || !valid(years_of_service) {
        return GratuityResult {
            rounded_years: 0.0,
            gratuity_raw: 0.0,
            gratuity_capped: 0.0,
            capped: false,
            cap: GRATUITY_CAP,
        };
    }

    let rounded_years = round_half_up(years_of_service);
    let gratuity_raw = rounded_years * monthly_salary * 15.0 / 26.0;
    GratuityResult {
        rounded_years,
        gratuity_raw,
        gratuity_capped: round_half_up(gratuity_raw.min(GRATUITY_CAP)),
        capped: gratuity_raw > GRATUITY_CAP,
        cap: GRATUITY_CAP,
    }
}
