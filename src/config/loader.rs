//! Policy file loading.
//!
//! This module provides the [`PolicyLoader`] type for loading the payroll
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Loads and provides access to the payroll policy.
///
/// # File format
///
/// ```text
/// # policy.yaml
/// paid_leave_allowance: 4
/// required_minutes: 525
/// ```
///
/// Missing fields fall back to the defaults; a missing file is an error so
/// that a mistyped path is not silently the default policy.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// assert!(loader.policy().required_minutes > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayrollPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid YAML, or
    /// holds out-of-range policy values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy: PayrollPolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns a loader carrying the default policy.
    pub fn with_defaults() -> Self {
        Self {
            policy: PayrollPolicy::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}
