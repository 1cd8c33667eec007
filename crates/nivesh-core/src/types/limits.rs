//! Parameter limits.
//!
//! A [`Limit`] states the valid range of one parameter and the value a fresh
//! calculator session starts with. A [`LimitSet`] groups the limits of every
//! parameter an instrument accepts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{NiveshError, NiveshResult};
use crate::types::{ParamId, Precision};

/// Valid range and default of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    /// Smallest value that is not reported as an error.
    pub min: f64,
    /// Optional ceiling; raw input above it is clamped down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Starting value of a new session.
    pub default: f64,
    /// Rendering precision.
    #[serde(default)]
    pub precision: Precision,
}

impl Limit {
    /// Creates a limit without a ceiling.
    #[must_use]
    pub fn new(min: f64, default: f64) -> Self {
        Self {
            min,
            max: None,
            default,
            precision: Precision::Whole,
        }
    }

    /// Sets the ceiling.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the rendering precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Returns true if `value` lies inside `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// Checks internal consistency.
    pub fn check(&self, param: ParamId) -> NiveshResult<()> {
        if !self.min.is_finite() || self.min < 0.0 {
            return Err(NiveshError::invalid_limit(
                param,
                format!("min must be a finite non-negative number, got {}", self.min),
            ));
        }
        if let Some(max) = self.max {
            if !max.is_finite() {
                return Err(NiveshError::invalid_limit(param, "max must be finite"));
            }
            if max < self.min {
                return Err(NiveshError::invalid_limit(
                    param,
                    format!("max {} is below min {}", max, self.min),
                ));
            }
        }
        if !self.default.is_finite() || !self.contains(self.default) {
            return Err(NiveshError::invalid_limit(
                param,
                format!("default {} is outside the valid range", self.default),
            ));
        }
        Ok(())
    }
}

/// The limits of every parameter accepted by one instrument.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitSet {
    limits: BTreeMap<ParamId, Limit>,
}

impl LimitSet {
    /// Starts building a limit set.
    #[must_use]
    pub fn builder() -> LimitSetBuilder {
        LimitSetBuilder::default()
    }

    /// Returns the limit of `param`, if the set contains it.
    #[must_use]
    pub fn get(&self, param: ParamId) -> Option<&Limit> {
        self.limits.get(&param)
    }

    /// Returns true if the set contains `param`.
    #[must_use]
    pub fn contains(&self, param: ParamId) -> bool {
        self.limits.contains_key(&param)
    }

    /// Iterates over all limits in parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &Limit)> {
        self.limits.iter().map(|(p, l)| (*p, l))
    }

    /// Returns the parameters of this set in order.
    #[must_use]
    pub fn params(&self) -> Vec<ParamId> {
        self.limits.keys().copied().collect()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Returns true if the set has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Returns a copy with `param`'s limit replaced, after checking it.
    pub fn with_limit(&self, param: ParamId, limit: Limit) -> NiveshResult<Self> {
        limit.check(param)?;
        let mut next = self.clone();
        next.limits.insert(param, limit);
        Ok(next)
    }

    /// Checks every limit in the set.
    pub fn check(&self) -> NiveshResult<()> {
        self.iter().try_for_each(|(param, limit)| limit.check(param))
    }
}

/// Collects limits without checking them; call [`LimitSet::check`] afterwards
/// when the source is untrusted.
impl FromIterator<(ParamId, Limit)> for LimitSet {
    fn from_iter<T: IntoIterator<Item = (ParamId, Limit)>>(iter: T) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}

/// Builder for [`LimitSet`].
#[derive(Debug, Default)]
pub struct LimitSetBuilder {
    limits: BTreeMap<ParamId, Limit>,
}

impl LimitSetBuilder {
    /// Adds or replaces a parameter limit.
    #[must_use]
    pub fn param(mut self, param: ParamId, limit: Limit) -> Self {
        self.limits.insert(param, limit);
        self
    }

    /// Builds the set, rejecting inconsistent limits.
    pub fn build(self) -> NiveshResult<LimitSet> {
        let set = LimitSet {
            limits: self.limits,
        };
        set.check()?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LimitSet {
        LimitSet::builder()
            .param(ParamId::Principal, Limit::new(500.0, 100_000.0).with_max(1e7))
            .param(
                ParamId::AnnualRate,
                Limit::new(1.0, 12.0)
                    .with_max(30.0)
                    .with_precision(Precision::Decimals(2)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_and_lookup() {
        let set = sample();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(ParamId::Principal).unwrap().min, 500.0);
        assert!(set.get(ParamId::Years).is_none());
        assert_eq!(set.params(), vec![ParamId::Principal, ParamId::AnnualRate]);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = LimitSet::builder()
            .param(ParamId::Years, Limit::new(10.0, 10.0).with_max(5.0))
            .build();
        assert!(matches!(
            result,
            Err(NiveshError::InvalidLimit {
                param: ParamId::Years,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_default_outside_range() {
        let limit = Limit::new(5.0, 2.0);
        assert!(limit.check(ParamId::YearsOfService).is_err());
    }

    #[test]
    fn test_rejects_negative_min() {
        assert!(Limit::new(-1.0, 0.0).check(ParamId::Age).is_err());
        assert!(Limit::new(f64::NAN, 0.0).check(ParamId::Age).is_err());
    }

    #[test]
    fn test_with_limit_replaces() {
        let set = sample()
            .with_limit(ParamId::Principal, Limit::new(1_000.0, 5_000.0))
            .unwrap();
        let limit = set.get(ParamId::Principal).unwrap();
        assert_eq!(limit.min, 1_000.0);
        assert_eq!(limit.max, None);
    }

    #[test]
    fn test_serde_is_keyed_by_param() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["annual_rate"]["max"], 30.0);
        assert_eq!(json["principal"]["precision"], "whole");
        let back: LimitSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
