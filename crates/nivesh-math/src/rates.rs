//! Rate conversion.
//!
//! Two conversion models coexist and are used per instrument:
//!
//! | Model | Formula | Used by |
//! |-------|---------|---------|
//! | Effective | `(1 + r)^(1/12) - 1` | SIP, SWP |
//! | Nominal | `r / n` | Compound interest, NSC, NPS, PPF |
//!
//! Rates are passed in percent (12.0 means 12% per annum).

/// Converts an annual percentage rate into the equivalent effective monthly
/// rate, so that twelve months of compounding reproduce the annual rate.
///
/// Returns 0 for a zero or non-finite rate.
///
/// # Example
///
/// ```rust
/// use nivesh_math::rates::annual_to_monthly_effective;
///
/// let monthly = annual_to_monthly_effective(12.0);
/// assert!((monthly - 0.009489).abs() < 1e-6);
/// ```
pub fn annual_to_monthly_effective(annual_percent: f64) -> f64 {
    if !annual_percent.is_finite() || annual_percent == 0.0 {
        return 0.0;
    }
    (1.0 + annual_percent / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Splits an annual percentage rate evenly across `periods_per_year`.
///
/// Returns 0 when `periods_per_year` is 0 or the rate is non-finite.
pub fn nominal_periodic_rate(annual_percent: f64, periods_per_year: u32) -> f64 {
    if periods_per_year == 0 || !annual_percent.is_finite() {
        return 0.0;
    }
    annual_percent / 100.0 / f64::from(periods_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_monthly_compounds_back_to_annual() {
        let monthly = annual_to_monthly_effective(12.0);
        assert_relative_eq!((1.0 + monthly).powi(12), 1.12, epsilon = 1e-12);
    }

    #[test]
    fn test_effective_zero_and_non_finite() {
        assert_eq!(annual_to_monthly_effective(0.0), 0.0);
        assert_eq!(annual_to_monthly_effective(f64::NAN), 0.0);
        assert_eq!(annual_to_monthly_effective(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_nominal() {
        assert_relative_eq!(nominal_periodic_rate(12.0, 12), 0.01);
        assert_relative_eq!(nominal_periodic_rate(8.0, 4), 0.02);
        assert_eq!(nominal_periodic_rate(8.0, 0), 0.0);
    }
}
