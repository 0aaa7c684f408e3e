//! Core physics and propagation logic lives in the member crates; this
//! facade re-exports them under one roof so front-ends (CLI, plots, tests)
//! share a single dependency.

pub use lift_atmosphere as atmosphere;
pub use lift_bernoulli as bernoulli;
pub use lift_coefficients as coefficients;
pub use lift_config as config;
pub use lift_core::{constants, ranges, units};
pub use lift_export as export;
pub use lift_uncertain as uncertain;
pub use lift_velocity as velocity;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
