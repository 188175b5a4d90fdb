//! Per-day record matching.
//!
//! Binds a calendar day to the attendance entry and work-report entry (if
//! any) covering that day. Matching is calendar-date equality: the stored
//! dates were already normalized to calendar dates at the boundary, so a
//! record matches regardless of the time-of-day it was written with.

use chrono::NaiveDate;

use crate::models::{AttendanceEntry, WorkReportEntry};

/// The records bound to a single calendar day.
///
/// A day with neither match contributes to the "not recorded" /
/// "not submitted" categories downstream.
#[derive(Debug, Clone, Copy)]
pub struct DayRecords<'a> {
    /// The attendance entry for the day, if one exists.
    pub attendance: Option<&'a AttendanceEntry>,
    /// The work report for the day, if one exists.
    pub report: Option<&'a WorkReportEntry>,
}

/// Looks up the attendance and work-report entries for `day`.
///
/// At most one entry of each kind is expected per employee per day; when
/// duplicates exist the first match in list order wins.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::match_day;
/// use payroll_engine::models::{ReportStatus, WorkReportEntry};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let reports = vec![WorkReportEntry {
///     id: "rep_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: day,
///     status: ReportStatus::Approved,
/// }];
/// let records = match_day(day, &[], &reports);
/// assert!(records.attendance.is_none());
/// assert_eq!(records.report.map(|r| r.status), Some(ReportStatus::Approved));
/// ```
pub fn match_day<'a>(
    day: NaiveDate,
    attendance: &'a [AttendanceEntry],
    reports: &'a [WorkReportEntry],
) -> DayRecords<'a> {
    DayRecords {
        attendance: attendance.iter().find(|entry| entry.date == day),
        report: reports.iter().find(|entry| entry.date == day),
    }
}
