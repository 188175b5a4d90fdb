//! Application state for the payroll reconciliation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{PayrollPolicy, PolicyLoader};

/// Shared application state.
///
/// Holds the loaded payroll policy, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy.
    policy: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(policy: PolicyLoader) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.policy.policy()
    }
}
