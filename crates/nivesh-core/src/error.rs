//! Error types for the Nivesh library.
//!
//! The formula library and the canonicalization functions are total and never
//! return these; errors only surface at the edges where a caller names a
//! parameter, an instrument or a limit that does not make sense.

use thiserror::Error;

use crate::types::{InstrumentKind, ParamId};

/// A specialized Result type for Nivesh operations.
pub type NiveshResult<T> = Result<T, NiveshError>;

/// The main error type for Nivesh operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NiveshError {
    /// The parameter is not part of the instrument's limit set.
    #[error("Unknown parameter '{param}' for {instrument}")]
    UnknownParameter {
        /// The instrument that was addressed.
        instrument: InstrumentKind,
        /// The parameter that is not accepted.
        param: ParamId,
    },

    /// A limit definition is inconsistent.
    #[error("Invalid limit for '{param}': {reason}")]
    InvalidLimit {
        /// The parameter whose limit is invalid.
        param: ParamId,
        /// Reason for invalidity.
        reason: String,
    },

    /// An instrument name could not be recognised.
    #[error("Unknown instrument: {name}")]
    UnknownInstrument {
        /// The name that failed to parse.
        name: String,
    },

    /// A parameter name could not be recognised.
    #[error("Unknown parameter name: {name}")]
    UnknownParameterName {
        /// The name that failed to parse.
        name: String,
    },

    /// A compounding frequency could not be recognised or is not allowed.
    #[error("Unknown frequency: {name}")]
    UnknownFrequency {
        /// The name that failed to parse.
        name: String,
    },
}

impl NiveshError {
    /// Creates an unknown parameter error.
    #[must_use]
    pub fn unknown_parameter(instrument: InstrumentKind, param: ParamId) -> Self {
        Self::UnknownParameter { instrument, param }
    }

    /// Creates an invalid limit error.
    #[must_use]
    pub fn invalid_limit(param: ParamId, reason: impl Into<String>) -> Self {
        Self::InvalidLimit {
            param,
            reason: reason.into(),
        }
    }

    /// Creates an unknown frequency error.
    #[must_use]
    pub fn unknown_frequency(name: impl Into<String>) -> Self {
        Self::UnknownFrequency { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NiveshError::unknown_parameter(InstrumentKind::Sip, ParamId::Age);
        assert_eq!(err.to_string(), "Unknown parameter 'age' for sip");
    }

    #[test]
    fn test_invalid_limit_display() {
        let err = NiveshError::invalid_limit(ParamId::Years, "max below min");
        assert!(err.to_string().contains("years"));
        assert!(err.to_string().contains("max below min"));
    }
}
