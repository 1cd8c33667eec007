//! # Nivesh Engine
//!
//! The input controller that sits between raw user input and the formula
//! library.
//!
//! - [`canonicalize`] / [`safe_value`]: the clamping discipline for raw input
//! - [`ValidationReport`]: below-minimum flags with display messages
//! - [`Calculator`]: a per-instrument session with a cached result
//! - [`evaluate`]: one-shot evaluation of an instrument chosen at runtime
//!
//! ## Flow
//!
//! ```text
//! raw input ─> canonicalize ─┬─> ValidationReport
//!                            │
//!                            └─> safe_value ─> compute_* ─> result
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nivesh_core::ParamId;
//! use nivesh_engine::prelude::*;
//!
//! let mut calc = Calculator::<CompoundInterest>::new();
//! calc.set(ParamId::Principal, "250000").unwrap();
//! calc.set(ParamId::AnnualRate, "8").unwrap();
//!
//! let yearly = calc.evaluate();
//! let half_yearly = calc.cycle_frequency();
//! assert!(half_yearly.total_amount > yearly.total_amount);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]

pub mod dispatch;
pub mod input;
pub mod instrument;
pub mod session;
pub mod validation;

pub use dispatch::{evaluate, CalculationResult, EvaluateOptions, Evaluation};
pub use input::{canonicalize, safe_value, RawInput};
pub use instrument::{CompoundInterest, Gratuity, Instrument, Lumpsum, Nps, Nsc, Ppf, Sip, Swp};
pub use session::{Calculator, CalculatorState};
pub use validation::{ValidationReport, ValidationResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dispatch::{evaluate, CalculationResult, EvaluateOptions, Evaluation};
    pub use crate::input::{canonicalize, safe_value, RawInput};
    pub use crate::instrument::{
        CompoundInterest, Gratuity, Instrument, Lumpsum, Nps, Nsc, Ppf, Sip, Swp,
    };
    pub use crate::session::{Calculator, CalculatorState};
    pub use crate::validation::{ValidationReport, ValidationResult};
}
