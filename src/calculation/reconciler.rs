//! Monthly payroll reconciliation.
//!
//! A single deterministic computation per (employee, month) pair: walk every
//! calendar day of the month, count the days that have both sufficient
//! attendance and an approved work report, add the flat paid-leave allowance,
//! and turn the result into an earnings/deductions split against the fixed
//! monthly salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, PayrollProfile, PayrollSummary, ReportStatus, WorkReportEntry};

use super::calendar::days_in_month;
use super::classifier::is_valid_attendance;
use super::matcher::match_day;

/// Reconciles one employee's month into a [`PayrollSummary`].
///
/// The record lists may be unfiltered; the reconciler considers only the
/// entries matching a calendar day of the target month. A day counts as
/// valid only when its attendance entry is a Present punch pair of at least
/// the required duration **and** its work report is approved. Paid days are
/// the valid days plus the flat leave allowance, clamped to the month
/// length, which keeps `deductions` non-negative for every input.
///
/// With a zero or absent salary every monetary field is zero while the day
/// counts are still computed.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] if `year`/`month` do not denote a
/// real calendar month. Data-quality problems never produce an error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::reconcile_month;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::PayrollProfile;
/// use rust_decimal::Decimal;
///
/// let profile = PayrollProfile {
///     employee_id: "emp_001".to_string(),
///     monthly_salary: Some(Decimal::from(3000)),
/// };
/// let summary =
///     reconcile_month(2025, 6, &[], &[], &profile, &PayrollPolicy::default()).unwrap();
/// // No valid days: paid days are just the 4-day allowance.
/// assert_eq!(summary.paid_days, 4);
/// assert_eq!(summary.earnings, Decimal::from(400));
/// assert_eq!(summary.deductions, Decimal::from(2600));
/// ```
pub fn reconcile_month(
    year: i32,
    month: u32,
    attendance: &[AttendanceEntry],
    reports: &[WorkReportEntry],
    profile: &PayrollProfile,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollSummary> {
    let total_working_days = days_in_month(year, month)?;
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })?;

    let valid_days = first
        .iter_days()
        .take(total_working_days as usize)
        .filter(|day| {
            let records = match_day(*day, attendance, reports);
            let attended = records
                .attendance
                .is_some_and(|entry| is_valid_attendance(entry, policy));
            let approved = records
                .report
                .is_some_and(|report| report.status == ReportStatus::Approved);
            attended && approved
        })
        .count() as u32;

    let paid_days = (valid_days + policy.paid_leave_allowance).min(total_working_days);

    let salary = profile.salary_or_zero();
    let (daily_rate, earnings, deductions) = if salary.is_zero() {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    } else {
        let daily_rate = salary / Decimal::from(total_working_days);
        let earnings = Decimal::from(paid_days) * daily_rate;
        // Deductions are derived from earnings so the two always sum to
        // the monthly salary exactly.
        (daily_rate, earnings, salary - earnings)
    };

    Ok(PayrollSummary {
        year,
        month,
        daily_rate,
        valid_days,
        paid_days,
        total_working_days,
        earnings,
        deductions,
    })
}
