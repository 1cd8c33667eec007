//! Domain types for the calculators.
//!
//! - [`ParamId`]: Identifier of a numeric input
//! - [`Precision`]: Unit precision policy of an input
//! - [`Limit`] / [`LimitSet`]: Valid ranges and defaults
//! - [`CompoundingFrequency`] / [`NscFrequency`]: Compounding options
//! - [`InstrumentKind`]: Calculator discriminator

mod frequency;
mod instrument;
mod limits;
mod param;

pub use frequency::{CompoundingFrequency, Cycle, NscFrequency};
pub use instrument::InstrumentKind;
pub use limits::{Limit, LimitSet, LimitSetBuilder};
pub use param::{ParamId, Precision};
