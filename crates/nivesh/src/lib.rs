//! # Nivesh
//!
//! Personal-finance calculators for Indian savings instruments.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`core`]: parameter identifiers, limits, frequencies and errors
//! - [`math`]: rate conversions, growth factors and rounding
//! - [`calc`]: the eight closed-form formulas and their schedules
//! - [`config`]: standard limits and limit files
//! - [`engine`]: input canonicalization, validation and calculator sessions
//!
//! ## Example
//!
//! ```rust
//! use nivesh::prelude::*;
//!
//! let mut ppf = Calculator::<Ppf>::new();
//! ppf.set(ParamId::YearlyInvestment, "150000").unwrap();
//! let result = ppf.evaluate();
//!
//! assert_eq!(result.invested_amount, 2_250_000.0);
//! assert_eq!(ppf.state(), CalculatorState::Computed);
//! ```

#![warn(missing_docs)]

pub use nivesh_calc as calc;
pub use nivesh_config as config;
pub use nivesh_core as core;
pub use nivesh_engine as engine;
pub use nivesh_math as math;

/// Everything needed to run a calculation.
pub mod prelude {
    pub use nivesh_calc::prelude::*;
    pub use nivesh_config::prelude::*;
    pub use nivesh_core::prelude::*;
    pub use nivesh_engine::prelude::*;
}
