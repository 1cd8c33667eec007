//! Minimum-value validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nivesh_core::types::{Limit, LimitSet, ParamId};

/// Validation outcome of one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True if the canonical value is below the minimum.
    pub error: bool,
    /// `"Minimum value is <min>"` on error, empty otherwise.
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Checks `canonical` against `limit`.
    pub fn check(canonical: f64, limit: &Limit) -> Self {
        if canonical < limit.min {
            Self {
                error: true,
                message: format!("Minimum value is {}", limit.precision.format(limit.min)),
            }
        } else {
            Self::ok()
        }
    }
}

/// Validation results of every parameter of an instrument, in parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    results: BTreeMap<ParamId, ValidationResult>,
}

impl ValidationReport {
    /// Validates canonical `values` against `limits`.
    ///
    /// Parameters of `limits` missing from `values` are checked as `0`.
    pub fn build(values: &BTreeMap<ParamId, f64>, limits: &LimitSet) -> Self {
        let results = limits
            .iter()
            .map(|(param, limit)| {
                let canonical = values.get(&param).copied().unwrap_or(0.0);
                (param, ValidationResult::check(canonical, limit))
            })
            .collect();
        Self { results }
    }

    /// Returns true if any parameter failed.
    pub fn has_errors(&self) -> bool {
        self.results.values().any(|r| r.error)
    }

    /// Returns the result of `param`.
    pub fn get(&self, param: ParamId) -> Option<&ValidationResult> {
        self.results.get(&param)
    }

    /// Iterates over all results.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &ValidationResult)> {
        self.results.iter().map(|(p, r)| (*p, r))
    }

    /// Iterates over failing parameters only.
    pub fn errors(&self) -> impl Iterator<Item = (ParamId, &ValidationResult)> {
        self.iter().filter(|(_, r)| r.error)
    }
}
