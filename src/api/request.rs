//! Request types for the payroll reconciliation API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! endpoint. Record dates arrive as strings exactly as the source
//! collections stored them; conversion into domain entries normalizes them
//! to calendar dates and drops the single offending record when a date is
//! unparsable, never failing the whole request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{ViewMode, parse_calendar_date, parse_timestamp};
use crate::models::{
    AttendanceEntry, AttendanceStatus, PayrollProfile, ReportStatus, WorkReportEntry,
};

/// Request body for the `/reconcile` endpoint.
///
/// Contains the employee's payroll profile, the reporting window selection,
/// and the full (date-unfiltered) record collections for the employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The employee and their payroll profile.
    pub employee: EmployeeRequest,
    /// The anchor date selecting the reporting window.
    pub reference_date: String,
    /// The window mode; defaults to month.
    #[serde(default)]
    pub mode: ViewMode,
    /// The employee's attendance entries, unfiltered by date.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntryRequest>,
    /// The employee's work reports, unfiltered by date.
    #[serde(default)]
    pub work_reports: Vec<WorkReportEntryRequest>,
}

/// Employee information in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The fixed monthly salary; absent means all monetary outputs are zero.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

impl From<EmployeeRequest> for PayrollProfile {
    fn from(request: EmployeeRequest) -> Self {
        PayrollProfile {
            employee_id: request.id,
            monthly_salary: request.monthly_salary,
        }
    }
}

/// Attendance entry in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The stored record date; plain date or timestamp.
    pub date: String,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Check-in punch, if recorded.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out punch, if recorded.
    #[serde(default)]
    pub check_out: Option<String>,
}

impl AttendanceEntryRequest {
    /// Converts the wire entry into a domain entry.
    ///
    /// Returns `None` when the record date is unparsable, excluding that
    /// single record from all tallies. A malformed punch is treated as a
    /// missing punch.
    pub fn into_entry(self, employee_id: &str) -> Option<AttendanceEntry> {
        let Some(date) = parse_calendar_date(&self.date) else {
            warn!(
                entry_id = %self.id,
                date = %self.date,
                "Dropping attendance entry with unparsable date"
            );
            return None;
        };
        Some(AttendanceEntry {
            id: self.id,
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
            check_in: self.check_in.as_deref().and_then(parse_timestamp),
            check_out: self.check_out.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Work report entry in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkReportEntryRequest {
    /// Unique identifier for the report.
    pub id: String,
    /// The stored record date; plain date or timestamp.
    pub date: String,
    /// The approval state of the report.
    pub status: ReportStatus,
}

impl WorkReportEntryRequest {
    /// Converts the wire entry into a domain entry.
    ///
    /// Returns `None` when the record date is unparsable.
    pub fn into_entry(self, employee_id: &str) -> Option<WorkReportEntry> {
        let Some(date) = parse_calendar_date(&self.date) else {
            warn!(
                entry_id = %self.id,
                date = %self.date,
                "Dropping work report with unparsable date"
            );
            return None;
        };
        Some(WorkReportEntry {
            id: self.id,
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
        })
    }
}
