//! Effective limits of every calculator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nivesh_core::types::{InstrumentKind, Limit, LimitSet, ParamId, Precision};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::standard::{standard_limits, MAX_HORIZON_YEARS, SWP_MAX_YEARS};

// =============================================================================
// LIMITS CONFIGURATION
// =============================================================================

/// One [`LimitSet`] per instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LimitsConfig {
    /// SIP limits.
    pub sip: LimitSet,
    /// Lumpsum limits.
    pub lumpsum: LimitSet,
    /// Compound interest limits.
    pub compound_interest: LimitSet,
    /// Gratuity limits.
    pub gratuity: LimitSet,
    /// NPS limits.
    pub nps: LimitSet,
    /// NSC limits.
    pub nsc: LimitSet,
    /// PPF limits.
    pub ppf: LimitSet,
    /// SWP limits.
    pub swp: LimitSet,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl LimitsConfig {
    /// The limits every calculator ships with.
    pub fn standard() -> Self {
        Self {
            sip: standard_limits(InstrumentKind::Sip),
            lumpsum: standard_limits(InstrumentKind::Lumpsum),
            compound_interest: standard_limits(InstrumentKind::CompoundInterest),
            gratuity: standard_limits(InstrumentKind::Gratuity),
            nps: standard_limits(InstrumentKind::Nps),
            nsc: standard_limits(InstrumentKind::Nsc),
            ppf: standard_limits(InstrumentKind::Ppf),
            swp: standard_limits(InstrumentKind::Swp),
        }
    }

    /// Returns the limits of `kind`.
    pub fn get(&self, kind: InstrumentKind) -> &LimitSet {
        match kind {
            InstrumentKind::Sip => &self.sip,
            InstrumentKind::Lumpsum => &self.lumpsum,
            InstrumentKind::CompoundInterest => &self.compound_interest,
            InstrumentKind::Gratuity => &self.gratuity,
            InstrumentKind::Nps => &self.nps,
            InstrumentKind::Nsc => &self.nsc,
            InstrumentKind::Ppf => &self.ppf,
            InstrumentKind::Swp => &self.swp,
        }
    }

    fn get_mut(&mut self, kind: InstrumentKind) -> &mut LimitSet {
        match kind {
            InstrumentKind::Sip => &mut self.sip,
            InstrumentKind::Lumpsum => &mut self.lumpsum,
            InstrumentKind::CompoundInterest => &mut self.compound_interest,
            InstrumentKind::Gratuity => &mut self.gratuity,
            InstrumentKind::Nps => &mut self.nps,
            InstrumentKind::Nsc => &mut self.nsc,
            InstrumentKind::Ppf => &mut self.ppf,
            InstrumentKind::Swp => &mut self.swp,
        }
    }

    /// Applies `overrides` on top of these limits and validates the result.
    ///
    /// An override may only touch parameters the instrument already takes.
    pub fn with_overrides(mut self, overrides: &LimitOverrides) -> ConfigResult<Self> {
        for (kind, params) in &overrides.0 {
            for (param, patch) in params {
                let set = self.get_mut(*kind);
                let Some(current) = set.get(*param).copied() else {
                    return Err(ConfigError::InvalidOverride {
                        config: kind.to_string(),
                        field: param.to_string(),
                    });
                };
                *set = set
                    .iter()
                    .map(|(p, l)| if p == *param { (p, patch.apply(current)) } else { (p, *l) })
                    .collect();
            }
        }
        self.validate_or_error()?;
        Ok(self)
    }
}

impl Validate for LimitsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for kind in InstrumentKind::ALL {
            let set = self.get(kind);
            if set.is_empty() {
                errors.push(ValidationError::with_rule(
                    kind.as_str(),
                    "at least one parameter is required",
                    "non_empty",
                ));
            }
            for (param, limit) in set.iter() {
                if let Err(err) = limit.check(param) {
                    let message = match err {
                        nivesh_core::NiveshError::InvalidLimit { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    errors.push(ValidationError::with_rule(
                        format!("{kind}.{param}"),
                        message,
                        "range",
                    ));
                }
                if let Some(ceiling) = horizon_ceiling(kind, param) {
                    if !limit.max.is_some_and(|max| max <= ceiling) {
                        errors.push(ValidationError::with_rule(
                            format!("{kind}.{param}"),
                            format!("max must be set and at most {ceiling} years"),
                            "horizon",
                        ));
                    }
                }
            }
        }
        errors
    }
}

/// Upper bound on the ceiling of a time parameter.
fn horizon_ceiling(kind: InstrumentKind, param: ParamId) -> Option<f64> {
    match (kind, param) {
        (InstrumentKind::Swp, ParamId::Years) => Some(SWP_MAX_YEARS),
        (
            _,
            ParamId::Years | ParamId::YearsOfService | ParamId::Age | ParamId::RetirementAge,
        ) => Some(MAX_HORIZON_YEARS),
        _ => None,
    }
}

// =============================================================================
// OVERRIDES
// =============================================================================

/// Partial replacement of one [`Limit`]. Unset fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitOverride {
    /// New minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// New ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// New starting value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    /// New rendering precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<Precision>,
}

impl LimitOverride {
    /// Returns `base` with the set fields replaced.
    #[must_use]
    pub fn apply(&self, base: Limit) -> Limit {
        Limit {
            min: self.min.unwrap_or(base.min),
            max: self.max.or(base.max),
            default: self.default.unwrap_or(base.default),
            precision: self.precision.unwrap_or(base.precision),
        }
    }
}

/// The contents of a limits file: instrument → parameter → partial limit.
///
/// ```toml
/// [sip.monthly_amount]
/// min = 500
///
/// [compound-interest.years]
/// max = 40
/// default = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitOverrides(pub BTreeMap<InstrumentKind, BTreeMap<ParamId, LimitOverride>>);

impl LimitOverrides {
    /// Returns true if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}
