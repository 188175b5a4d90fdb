//! Payroll input and output models.
//!
//! This module contains the [`PayrollProfile`] read-only input and the
//! [`PayrollSummary`] produced by the monthly reconciler. The summary is
//! ephemeral: it is recomputed on every query and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed-salary payroll profile for one employee.
///
/// `monthly_salary` is optional: an absent (or zero) salary makes every
/// monetary output of the reconciler zero while day counts are still
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollProfile {
    /// The employee this profile belongs to.
    pub employee_id: String,
    /// The fixed monthly salary, if configured.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

impl PayrollProfile {
    /// Returns the monthly salary, treating an absent salary as zero.
    pub fn salary_or_zero(&self) -> Decimal {
        self.monthly_salary.unwrap_or(Decimal::ZERO)
    }
}

/// The result of reconciling one employee's month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = PayrollSummary {
///     year: 2025,
///     month: 6,
///     daily_rate: Decimal::from_str("100").unwrap(),
///     valid_days: 20,
///     paid_days: 24,
///     total_working_days: 30,
///     earnings: Decimal::from_str("2400").unwrap(),
///     deductions: Decimal::from_str("600").unwrap(),
/// };
/// assert_eq!(summary.earnings + summary.deductions, Decimal::from_str("3000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The reconciled year.
    pub year: i32,
    /// The reconciled month (1-12).
    pub month: u32,
    /// Monthly salary divided by the number of calendar days in the month.
    pub daily_rate: Decimal,
    /// Days with both sufficient attendance and an approved report.
    pub valid_days: u32,
    /// Valid days plus the flat leave allowance, clamped to the month length.
    pub paid_days: u32,
    /// Total working days; currently every calendar day of the month.
    pub total_working_days: u32,
    /// `paid_days * daily_rate`.
    pub earnings: Decimal,
    /// `monthly_salary - earnings`; never negative.
    pub deductions: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PP-001: absent salary reads as zero
    #[test]
    fn test_salary_or_zero_when_absent() {
        let profile = PayrollProfile {
            employee_id: "emp_001".to_string(),
            monthly_salary: None,
        };
        assert_eq!(profile.salary_or_zero(), Decimal::ZERO);
    }

    /// PP-002: configured salary passes through
    #[test]
    fn test_salary_or_zero_when_present() {
        let profile = PayrollProfile {
            employee_id: "emp_001".to_string(),
            monthly_salary: Some(dec("3000")),
        };
        assert_eq!(profile.salary_or_zero(), dec("3000"));
    }

    #[test]
    fn test_profile_deserialization_defaults_salary() {
        let json = r#"{ "employee_id": "emp_001" }"#;
        let profile: PayrollProfile = serde_json::from_str(json).unwrap();
        assert!(profile.monthly_salary.is_none());
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = PayrollSummary {
            year: 2025,
            month: 6,
            daily_rate: dec("100"),
            valid_days: 20,
            paid_days: 24,
            total_working_days: 30,
            earnings: dec("2400"),
            deductions: dec("600"),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PayrollSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
