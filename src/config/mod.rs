//! Policy configuration for the payroll reconciliation engine.
//!
//! The two policy constants the reconciliation rules depend on (the flat
//! monthly paid-leave allowance and the required worked duration) are
//! overridable configuration with fixed defaults, loadable from a YAML file.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{DEFAULT_PAID_LEAVE_ALLOWANCE, DEFAULT_REQUIRED_MINUTES, PayrollPolicy};
