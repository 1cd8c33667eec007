//! CLI command implementations.

pub mod calculate;
pub mod config;
pub mod limits;

// Re-export submodules for convenience
pub use calculate::{
    CalculatorArgs, CompoundArgs, GratuityArgs, LumpsumArgs, NpsArgs, NscArgs, PpfArgs, SipArgs,
    SwpArgs,
};
pub use config::ConfigArgs;
pub use limits::LimitsArgs;
