//! Policy configuration types.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default flat paid-leave allowance, in days per month.
pub const DEFAULT_PAID_LEAVE_ALLOWANCE: u32 = 4;

/// Default required worked duration for a valid attendance day, in minutes
/// (8 hours 45 minutes).
pub const DEFAULT_REQUIRED_MINUTES: i64 = 525;

/// The policy constants the reconciliation rules depend on.
///
/// Both fields default to the current product policy; either can be
/// overridden via a policy file or struct literal.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.paid_leave_allowance, 4);
/// assert_eq!(policy.required_minutes, 525);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollPolicy {
    /// Days of paid leave granted per month, unconditionally.
    #[serde(default = "default_paid_leave_allowance")]
    pub paid_leave_allowance: u32,
    /// Minimum worked duration in minutes for a valid attendance day.
    #[serde(default = "default_required_minutes")]
    pub required_minutes: i64,
}

fn default_paid_leave_allowance() -> u32 {
    DEFAULT_PAID_LEAVE_ALLOWANCE
}

fn default_required_minutes() -> i64 {
    DEFAULT_REQUIRED_MINUTES
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            paid_leave_allowance: DEFAULT_PAID_LEAVE_ALLOWANCE,
            required_minutes: DEFAULT_REQUIRED_MINUTES,
        }
    }
}

impl PayrollPolicy {
    /// Validates the policy values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when `required_minutes` is not
    /// positive or the leave allowance exceeds the shortest possible month.
    pub fn validate(&self) -> EngineResult<()> {
        if self.required_minutes <= 0 {
            return Err(EngineError::InvalidPolicy {
                field: "required_minutes".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.paid_leave_allowance > 28 {
            return Err(EngineError::InvalidPolicy {
                field: "paid_leave_allowance".to_string(),
                message: "cannot exceed 28 days".to_string(),
            });
        }
        Ok(())
    }
}
