//! # Nivesh Math
//!
//! Numeric utilities shared by the Nivesh calculators.
//!
//! This crate provides:
//!
//! - **Rates**: Annual-to-periodic rate conversion, both effective and nominal
//! - **Rounding**: The half-up rounding policy applied to monetary results
//! - **Growth**: Compound growth and annuity-due future value factors
//!
//! Every function here is total. Degenerate inputs (zero rate, zero periods)
//! have defined results and never divide by zero.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]

pub mod growth;
pub mod rates;
pub mod rounding;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::growth::{annuity_due_future_value, compound_amount, growth_factor};
    pub use crate::rates::{annual_to_monthly_effective, nominal_periodic_rate};
    pub use crate::rounding::{round_half_up, round_to_cents, Rounding};
}
