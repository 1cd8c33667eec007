//! Parameter identifiers and unit precision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use nivesh_math::rounding::round_half_up;

use crate::error::NiveshError;

/// Names every numeric input accepted by any calculator.
///
/// Each instrument uses a subset; which subset is defined by its
/// [`LimitSet`](crate::LimitSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamId {
    /// Fixed monthly contribution
    MonthlyAmount,
    /// One-time principal
    Principal,
    /// Annual rate of return or interest, in percent
    AnnualRate,
    /// Investment horizon in years
    Years,
    /// Last drawn monthly salary (basic + DA)
    MonthlySalary,
    /// Completed years of service
    YearsOfService,
    /// Current age in years
    Age,
    /// Age at retirement in years
    RetirementAge,
    /// Yearly deposit
    YearlyInvestment,
    /// Initial corpus for a withdrawal plan
    Investment,
    /// Fixed monthly withdrawal
    Withdrawal,
}

impl ParamId {
    /// All parameter identifiers.
    pub const ALL: [ParamId; 11] = [
        ParamId::MonthlyAmount,
        ParamId::Principal,
        ParamId::AnnualRate,
        ParamId::Years,
        ParamId::MonthlySalary,
        ParamId::YearsOfService,
        ParamId::Age,
        ParamId::RetirementAge,
        ParamId::YearlyInvestment,
        ParamId::Investment,
        ParamId::Withdrawal,
    ];

    /// Returns the snake_case key used in config files and JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamId::MonthlyAmount => "monthly_amount",
            ParamId::Principal => "principal",
            ParamId::AnnualRate => "annual_rate",
            ParamId::Years => "years",
            ParamId::MonthlySalary => "monthly_salary",
            ParamId::YearsOfService => "years_of_service",
            ParamId::Age => "age",
            ParamId::RetirementAge => "retirement_age",
            ParamId::YearlyInvestment => "yearly_investment",
            ParamId::Investment => "investment",
            ParamId::Withdrawal => "withdrawal",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ParamId::MonthlyAmount => "Monthly investment",
            ParamId::Principal => "Principal amount",
            ParamId::AnnualRate => "Rate of return (p.a.)",
            ParamId::Years => "Time period (years)",
            ParamId::MonthlySalary => "Monthly salary",
            ParamId::YearsOfService => "Years of service",
            ParamId::Age => "Current age",
            ParamId::RetirementAge => "Retirement age",
            ParamId::YearlyInvestment => "Yearly investment",
            ParamId::Investment => "Total investment",
            ParamId::Withdrawal => "Withdrawal per month",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = NiveshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        ParamId::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or(NiveshError::UnknownParameterName { name: s.to_string() })
    }
}

/// Unit precision policy of a parameter.
///
/// Precision never alters a canonical value; it controls how bounds and
/// values of the parameter are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Whole units (currency, years)
    #[default]
    Whole,
    /// A fixed number of decimal places (rates)
    Decimals(u8),
}

impl Precision {
    /// Formats a value according to this precision, dropping trailing zeros.
    ///
    /// Whole units round half-up, like every monetary result.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Precision::Whole => format!("{}", round_half_up(value)),
            Precision::Decimals(places) => {
                let s = format!("{:.*}", usize::from(*places), value);
                if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                } else {
                    s
                }
            }
        }
    }
}
