//! Raw input canonicalization and safe values.
//!
//! Every edit goes through two steps before it reaches a formula:
//!
//! 1. [`canonicalize`] turns whatever the user typed into a finite,
//!    non-negative number, clamping it to the ceiling if there is one. There
//!    is no floor clamp, so a value below the minimum stays visible and can
//!    be reported.
//! 2. [`safe_value`] floors the canonical value at the minimum (and caps it
//!    at the ceiling). This is the value the formulas see.

use std::fmt;

use serde::{Deserialize, Serialize};

use nivesh_core::types::Limit;

/// A parameter value as entered, before canonicalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Nothing entered.
    #[default]
    Empty,
    /// Text from a form field or command line.
    Text(String),
    /// An already numeric value.
    Number(f64),
}

impl RawInput {
    /// Returns true for [`RawInput::Empty`] and for blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            RawInput::Empty => true,
            RawInput::Text(text) => text.trim().is_empty(),
            RawInput::Number(_) => false,
        }
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Empty, Into::into)
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Empty => Ok(()),
            RawInput::Text(text) => write!(f, "{text}"),
            RawInput::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Converts raw input into a canonical value.
///
/// Empty, blank, unparsable, non-finite and negative input all become `0`,
/// never the minimum. Values above `ceiling` are clamped down to it.
///
/// # Example
///
/// ```rust
/// use nivesh_engine::input::{canonicalize, RawInput};
///
/// assert_eq!(canonicalize(&RawInput::Empty, Some(40.0)), 0.0);
/// assert_eq!(canonicalize(&"12.5".into(), Some(30.0)), 12.5);
/// assert_eq!(canonicalize(&"95".into(), Some(30.0)), 30.0);
/// assert_eq!(canonicalize(&(-4.0).into(), None), 0.0);
/// ```
pub fn canonicalize(raw: &RawInput, ceiling: Option<f64>) -> f64 {
    let parsed = match raw {
        RawInput::Empty => return 0.0,
        RawInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return 0.0;
            }
            text.parse::<f64>().unwrap_or(0.0)
        }
        RawInput::Number(value) => *value,
    };

    if !parsed.is_finite() || parsed < 0.0 {
        return 0.0;
    }

    match ceiling {
        Some(max) if parsed > max => {
            tracing::trace!(value = parsed, ceiling = max, "clamped input to ceiling");
            max
        }
        _ => parsed,
    }
}

/// Returns the value a formula should use for `canonical`.
///
/// The result is `limit.min` when `canonical` is below it, otherwise
/// `canonical` capped at `limit.max`.
pub fn safe_value(canonical: f64, limit: &Limit) -> f64 {
    if canonical < limit.min {
        return limit.min;
    }
    match limit.max {
        Some(max) => canonical.min(max),
        None => canonical,
    }
}
