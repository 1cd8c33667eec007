//! # Nivesh Calc
//!
//! The formula library: one pure function per savings instrument, each mapping
//! a parameter set to a result record.
//!
//! | Function | Model |
//! |----------|-------|
//! | [`compute_sip`] | Annuity-due, effective monthly rate |
//! | [`compute_lumpsum`] | Annual compounding |
//! | [`compute_compound_interest`] | Nominal rate, 1/2/4 periods per year |
//! | [`compute_gratuity`] | 15/26 of monthly salary per year, capped |
//! | [`compute_nps`] | Annuity-due, nominal monthly rate |
//! | [`compute_nsc`] | Nominal rate, 1/2 periods per year, fixed tenure |
//! | [`compute_ppf`] | Annuity-due, yearly deposits |
//! | [`compute_swp`] | Month-by-month withdrawal simulation |
//!
//! Every function is total: degenerate input (zero amount, zero rate, zero
//! tenure) yields a zero or identity result, never a NaN.
//!
//! ## Example
//!
//! ```rust
//! use nivesh_calc::{compute_gratuity, compute_sip};
//!
//! let sip = compute_sip(25_000.0, 12.0, 10.0);
//! assert_eq!(sip.months, 120);
//! assert_eq!(sip.total_invested, 3_000_000.0);
//!
//! let gratuity = compute_gratuity(60_000.0, 20.0);
//! assert_eq!(gratuity.gratuity_capped, 692_308.0);
//! assert!(!gratuity.capped);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

pub mod compound;
pub mod gratuity;
pub mod lumpsum;
pub mod nps;
pub mod nsc;
pub mod ppf;
pub mod sip;
pub mod swp;

pub use compound::{compute_compound_interest, CompoundInterestResult};
pub use gratuity::{compute_gratuity, GratuityResult, GRATUITY_CAP};
pub use lumpsum::{compute_lumpsum, lumpsum_schedule, LumpsumResult, LumpsumYear};
pub use nps::{compute_nps, NpsResult, MIN_ANNUITY_SHARE};
pub use nsc::{compute_nsc, NscResult, NSC_TENURE_YEARS};
pub use ppf::{compute_ppf, PpfResult};
pub use sip::{compute_sip, sip_schedule, SipResult, SipYear};
pub use swp::{compute_swp, swp_schedule, SwpMonth, SwpResult, SWP_MAX_MONTHS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        compute_compound_interest, compute_gratuity, compute_lumpsum, compute_nps, compute_nsc,
        compute_ppf, compute_sip, compute_swp,
    };
    pub use crate::{
        CompoundInterestResult, GratuityResult, LumpsumResult, NpsResult, NscResult, PpfResult,
        SipResult, SwpResult,
    };
}

/// Maps non-finite and negative inputs to zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Maps a non-finite rate to zero. Rates below -100% are floored there, a
/// total loss.
pub(crate) fn finite_rate(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.max(-100.0)
    } else {
        0.0
    }
}

/// Number of whole months in `years`, rounded half-up.
pub(crate) fn months_in(years: f64) -> u32 {
    nivesh_math::rounding::round_half_up(non_negative(years) * 12.0) as u32
}
