//! Instrument discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NiveshError;

/// Identifies which calculator a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstrumentKind {
    /// Systematic Investment Plan
    Sip,
    /// Single upfront investment
    Lumpsum,
    /// Compound interest with selectable frequency
    CompoundInterest,
    /// Statutory gratuity
    Gratuity,
    /// National Pension System
    Nps,
    /// National Savings Certificate
    Nsc,
    /// Public Provident Fund
    Ppf,
    /// Systematic Withdrawal Plan
    Swp,
}

impl InstrumentKind {
    /// All instruments.
    pub const ALL: [InstrumentKind; 8] = [
        InstrumentKind::Sip,
        InstrumentKind::Lumpsum,
        InstrumentKind::CompoundInterest,
        InstrumentKind::Gratuity,
        InstrumentKind::Nps,
        InstrumentKind::Nsc,
        InstrumentKind::Ppf,
        InstrumentKind::Swp,
    ];

    /// Returns the kebab-case identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Sip => "sip",
            InstrumentKind::Lumpsum => "lumpsum",
            InstrumentKind::CompoundInterest => "compound-interest",
            InstrumentKind::Gratuity => "gratuity",
            InstrumentKind::Nps => "nps",
            InstrumentKind::Nsc => "nsc",
            InstrumentKind::Ppf => "ppf",
            InstrumentKind::Swp => "swp",
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InstrumentKind::Sip => "SIP Calculator",
            InstrumentKind::Lumpsum => "Lumpsum Calculator",
            InstrumentKind::CompoundInterest => "Compound Interest Calculator",
            InstrumentKind::Gratuity => "Gratuity Calculator",
            InstrumentKind::Nps => "NPS Calculator",
            InstrumentKind::Nsc => "NSC Calculator",
            InstrumentKind::Ppf => "PPF Calculator",
            InstrumentKind::Swp => "SWP Calculator",
        }
    }

    /// Returns true if the instrument takes a compounding frequency option.
    #[must_use]
    pub fn has_frequency(&self) -> bool {
        matches!(self, InstrumentKind::CompoundInterest | InstrumentKind::Nsc)
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKind {
    type Err = NiveshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        match key.as_str() {
            "compound" | "ci" => Ok(InstrumentKind::CompoundInterest),
            _ => InstrumentKind::ALL
                .into_iter()
                .find(|k| k.as_str() == key)
                .ok_or(NiveshError::UnknownInstrument {
                    name: s.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("SIP".parse::<InstrumentKind>().unwrap(), InstrumentKind::Sip);
        assert_eq!(
            "compound_interest".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::CompoundInterest
        );
        assert_eq!(
            "compound".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::CompoundInterest
        );
        assert!("elss".parse::<InstrumentKind>().is_err());
    }

    #[test]
    fn test_has_frequency() {
        assert!(InstrumentKind::Nsc.has_frequency());
        assert!(!InstrumentKind::Ppf.has_frequency());
    }
}
