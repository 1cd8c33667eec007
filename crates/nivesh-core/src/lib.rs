//! # Nivesh Core
//!
//! Core types and abstractions for the Nivesh personal-finance calculators.
//!
//! This crate provides the foundational building blocks used throughout Nivesh:
//!
//! - **Parameters**: [`ParamId`] names every numeric input a calculator accepts
//! - **Limits**: [`Limit`] and [`LimitSet`] describe valid ranges and defaults
//! - **Frequencies**: compounding frequencies with their cycling order
//! - **Instruments**: the [`InstrumentKind`] discriminator
//!
//! ## Example
//!
//! ```rust
//! use nivesh_core::prelude::*;
//!
//! let limits = LimitSet::builder()
//!     .param(ParamId::MonthlyAmount, Limit::new(100.0, 25_000.0).with_max(10_000_000.0))
//!     .param(ParamId::AnnualRate, Limit::new(1.0, 12.0).with_max(30.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(limits.get(ParamId::AnnualRate).unwrap().min, 1.0);
//! assert_eq!(CompoundingFrequency::Yearly.next(), CompoundingFrequency::HalfYearly);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{NiveshError, NiveshResult};
    pub use crate::types::{
        CompoundingFrequency, Cycle, InstrumentKind, Limit, LimitSet, LimitSetBuilder,
        NscFrequency, ParamId, Precision,
    };
}

// Re-export commonly used types at crate root
pub use error::{NiveshError, NiveshResult};
pub use types::{InstrumentKind, Limit, LimitSet, ParamId};
