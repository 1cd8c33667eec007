//! Compounding frequency types.
//!
//! Two frequency types exist on purpose: the general compound-interest
//! calculator offers yearly, half-yearly and quarterly compounding, while NSC
//! only compounds yearly or half-yearly. Keeping them as distinct types makes
//! an NSC calculation with quarterly compounding unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NiveshError;

/// An option that can be advanced through a fixed, repeating order.
pub trait Cycle: Copy {
    /// Returns the value that follows `self` in the cycle.
    fn next(self) -> Self;
}

/// Compounding frequency for the compound-interest calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    /// Compounded once per year
    #[default]
    Yearly,
    /// Compounded twice per year
    HalfYearly,
    /// Compounded four times per year
    Quarterly,
}

impl CompoundingFrequency {
    /// All frequencies in cycling order.
    pub const ALL: [CompoundingFrequency; 3] = [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Quarterly,
    ];

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Quarterly => 4,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFrequency::Yearly => "Yearly",
            CompoundingFrequency::HalfYearly => "Half-Yearly",
            CompoundingFrequency::Quarterly => "Quarterly",
        }
    }
}

impl Cycle for CompoundingFrequency {
    fn next(self) -> Self {
        match self {
            CompoundingFrequency::Yearly => CompoundingFrequency::HalfYearly,
            CompoundingFrequency::HalfYearly => CompoundingFrequency::Quarterly,
            CompoundingFrequency::Quarterly => CompoundingFrequency::Yearly,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = NiveshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "yearly" | "annual" | "1" => Ok(CompoundingFrequency::Yearly),
            "halfyearly" | "semiannual" | "2" => Ok(CompoundingFrequency::HalfYearly),
            "quarterly" | "4" => Ok(CompoundingFrequency::Quarterly),
            _ => Err(NiveshError::unknown_frequency(s)),
        }
    }
}

/// Compounding frequency accepted by the NSC calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NscFrequency {
    /// Compounded once per year
    #[default]
    Yearly,
    /// Compounded twice per year
    HalfYearly,
}

impl NscFrequency {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        CompoundingFrequency::from(*self).periods_per_year()
    }
}

impl Cycle for NscFrequency {
    fn next(self) -> Self {
        match self {
            NscFrequency::Yearly => NscFrequency::HalfYearly,
            NscFrequency::HalfYearly => NscFrequency::Yearly,
        }
    }
}

impl From<NscFrequency> for CompoundingFrequency {
    fn from(freq: NscFrequency) -> Self {
        match freq {
            NscFrequency::Yearly => CompoundingFrequency::Yearly,
            NscFrequency::HalfYearly => CompoundingFrequency::HalfYearly,
        }
    }
}

impl fmt::Display for NscFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CompoundingFrequency::from(*self))
    }
}

impl TryFrom<CompoundingFrequency> for NscFrequency {
    type Error = NiveshError;

    fn try_from(freq: CompoundingFrequency) -> Result<Self, Self::Error> {
        match freq {
            CompoundingFrequency::Yearly => Ok(NscFrequency::Yearly),
            CompoundingFrequency::HalfYearly => Ok(NscFrequency::HalfYearly),
            CompoundingFrequency::Quarterly => Err(NiveshError::unknown_frequency(freq.label())),
        }
    }
}

impl FromStr for NscFrequency {
    type Err = NiveshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NscFrequency::try_from(s.parse::<CompoundingFrequency>()?)
    }
}

/// Lowercases and strips separators so "Half-Yearly", "half_yearly" and
/// "halfyearly" all parse alike.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
