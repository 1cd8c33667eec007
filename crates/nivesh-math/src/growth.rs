//! Compound growth and annuity factors.

/// Returns `(1 + rate)^periods`.
///
/// `periods` may be fractional, as in a lumpsum held for 7.5 years.
pub fn growth_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of an annuity-due: `periods` equal payments of `payment`,
/// each made at the start of its period and compounding at `rate` per period.
///
/// ```text
/// F = P × [((1 + i)^n − 1) / i] × (1 + i)
/// ```
///
/// With a zero rate there is no growth and the result is `P × n`.
///
/// # Example
///
/// ```rust
/// use nivesh_math::growth::annuity_due_future_value;
///
/// // Three yearly deposits of 100 at 10%: 110 + 121 + 133.1
/// let fv = annuity_due_future_value(100.0, 0.10, 3.0);
/// assert!((fv - 364.1).abs() < 1e-9);
/// ```
pub fn annuity_due_future_value(payment: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return payment * periods;
    }
    // expm1/ln_1p keep (1 + i)^n - 1 accurate when i is tiny
    let accumulated = (periods * rate.ln_1p()).exp_m1();
    payment * (accumulated / rate) * (1.0 + rate)
}

/// Compounds `principal` at `annual_percent` split across `periods_per_year`
/// for `years`:
///
/// ```text
/// A = P × (1 + r / n)^(n × t)
/// ```
pub fn compound_amount(
    principal: f64,
    annual_percent: f64,
    periods_per_year: u32,
    years: f64,
) -> f64 {
    if periods_per_year == 0 {
        return principal;
    }
    let n = f64::from(periods_per_year);
    principal * growth_factor(annual_percent / 100.0 / n, n * years)
}
