//! Rounding policy.
//!
//! Monetary results are rounded once, at the end of a calculation, to the
//! nearest whole currency unit. Ties round towards positive infinity, so
//! `2.5 -> 3` and `-2.5 -> -2`. The withdrawal simulation additionally rounds
//! its running balance to cents every period.

/// Rounds to the nearest integer, ties towards positive infinity.
///
/// Non-finite input is returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to the nearest hundredth, ties towards positive infinity.
pub fn round_to_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Precision a monetary value is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// No rounding.
    Exact,
    /// Nearest hundredth.
    Cents,
    /// Nearest whole unit.
    #[default]
    Whole,
}

impl Rounding {
    /// Applies this rounding to `value`.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Exact => value,
            Rounding::Cents => round_to_cents(value),
            Rounding::Whole => round_half_up(value),
        }
    }
}
