//! Work report entry model and approval states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a submitted work report.
///
/// Transitions happen in an external approval action; the engine only reads
/// the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Reviewed and approved.
    Approved,
    /// Reviewed and rejected.
    Rejected,
}

impl ReportStatus {
    /// Returns the category label used in distribution series.
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
        }
    }
}

/// A work report submitted by an employee for one calendar day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ReportStatus, WorkReportEntry};
/// use chrono::NaiveDate;
///
/// let report = WorkReportEntry {
///     id: "rep_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     status: ReportStatus::Approved,
/// };
/// assert_eq!(report.status.label(), "approved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkReportEntry {
    /// Unique identifier for the report.
    pub id: String,
    /// The employee who submitted the report.
    pub employee_id: String,
    /// The calendar date the report covers.
    pub date: NaiveDate,
    /// The approval state of the report.
    pub status: ReportStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// WR-001: serde uses snake_case status names
    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    /// WR-002: round trip
    #[test]
    fn test_report_round_trip() {
        let report = WorkReportEntry {
            id: "rep_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status: ReportStatus::Rejected,
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: WorkReportEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }

    #[test]
    fn test_report_deserialization() {
        let json = r#"{
            "id": "rep_002",
            "employee_id": "emp_001",
            "date": "2025-06-03",
            "status": "pending"
        }"#;
        let report: WorkReportEntry = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
    }
}
