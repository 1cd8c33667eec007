//! # Nivesh Config
//!
//! Limits and defaults of every calculator, with file-based overrides.
//!
//! The standard limits are compiled in. A limits file in TOML or JSON only
//! names the fields it changes:
//!
//! ```toml
//! [sip.monthly_amount]
//! min = 500
//! max = 5000000
//!
//! [ppf.annual_rate]
//! default = 7.1
//! precision = { decimals = 2 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nivesh_config::prelude::*;
//! use nivesh_core::{InstrumentKind, ParamId};
//!
//! let config = LimitsConfig::standard();
//! let years = config.get(InstrumentKind::Ppf).get(ParamId::Years).unwrap();
//! assert_eq!(years.min, 15.0);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod limits;
pub mod loader;
pub mod standard;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use limits::{LimitOverride, LimitOverrides, LimitsConfig};
pub use loader::{
    load_effective, load_limits, parse_overrides, resolve_path, to_toml, ConfigFormat,
    CONFIG_ENV_VAR,
};
pub use standard::{standard_limits, MAX_HORIZON_YEARS, SWP_MAX_YEARS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::limits::{LimitOverride, LimitOverrides, LimitsConfig};
    pub use crate::loader::{load_effective, load_limits, ConfigFormat};
    pub use crate::standard::standard_limits;
}
