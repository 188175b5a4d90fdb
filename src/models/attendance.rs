//! Attendance entry model and status categories.
//!
//! This module defines the [`AttendanceEntry`] struct holding one day's
//! check-in/check-out punches and its recorded [`AttendanceStatus`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The recorded status of an attendance entry.
///
/// This is the status stored by the attendance subsystem; the derived
/// "less worked" condition is computed separately and is additive with
/// the stored status (a day can be both `Present` and less-worked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present for the day.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee worked a half day.
    HalfDay,
    /// The employee was on leave.
    Leave,
    /// The employee arrived late.
    Late,
    /// The employee left before the end of the working day.
    EarlyDeparture,
}

impl AttendanceStatus {
    /// Returns the category label used in distribution series.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::HalfDay => "half_day",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Late => "late",
            AttendanceStatus::EarlyDeparture => "early_departure",
        }
    }

    /// All fixed status categories, in tally order.
    pub fn all() -> [AttendanceStatus; 6] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::HalfDay,
            AttendanceStatus::Leave,
            AttendanceStatus::Late,
            AttendanceStatus::EarlyDeparture,
        ]
    }
}

/// A single day's attendance record for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceEntry, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let entry = AttendanceEntry {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     status: AttendanceStatus::Present,
///     check_in: NaiveDateTime::parse_from_str("2025-06-02 09:00:00", "%Y-%m-%d %H:%M:%S").ok(),
///     check_out: NaiveDateTime::parse_from_str("2025-06-02 18:00:00", "%Y-%m-%d %H:%M:%S").ok(),
/// };
/// assert_eq!(entry.worked_minutes(), Some(540));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The calendar date the entry covers.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Check-in punch, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out punch, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl AttendanceEntry {
    /// Returns the worked duration in minutes, if both punches are recorded.
    ///
    /// A check-out earlier than the check-in yields a negative duration;
    /// callers treat that as insufficient duration rather than an error.
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_minutes()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_entry(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> AttendanceEntry {
        AttendanceEntry {
            id: "att_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status: AttendanceStatus::Present,
            check_in,
            check_out,
        }
    }

    /// AE-001: full day punch pair
    #[test]
    fn test_worked_minutes_full_day() {
        let entry = make_entry(
            Some(make_datetime("2025-06-02", "09:00:00")),
            Some(make_datetime("2025-06-02", "18:00:00")),
        );
        assert_eq!(entry.worked_minutes(), Some(540));
    }

    /// AE-002: missing check-out
    #[test]
    fn test_worked_minutes_missing_check_out() {
        let entry = make_entry(Some(make_datetime("2025-06-02", "09:00:00")), None);
        assert_eq!(entry.worked_minutes(), None);
    }

    /// AE-003: missing both punches
    #[test]
    fn test_worked_minutes_missing_both() {
        let entry = make_entry(None, None);
        assert_eq!(entry.worked_minutes(), None);
    }

    /// AE-004: inverted punches give negative minutes, not a panic
    #[test]
    fn test_worked_minutes_inverted_punches() {
        let entry = make_entry(
            Some(make_datetime("2025-06-02", "18:00:00")),
            Some(make_datetime("2025-06-02", "09:00:00")),
        );
        assert_eq!(entry.worked_minutes(), Some(-540));
    }

    #[test]
    fn test_status_labels_are_snake_case() {
        assert_eq!(AttendanceStatus::Present.label(), "present");
        assert_eq!(AttendanceStatus::HalfDay.label(), "half_day");
        assert_eq!(AttendanceStatus::EarlyDeparture.label(), "early_departure");
    }

    #[test]
    fn test_all_covers_every_status() {
        assert_eq!(AttendanceStatus::all().len(), 6);
    }

    #[test]
    fn test_status_serialization_matches_labels() {
        for status in AttendanceStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_entry_deserialization_defaults_punches() {
        let json = r#"{
            "id": "att_001",
            "employee_id": "emp_001",
            "date": "2025-06-02",
            "status": "absent"
        }"#;
        let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, AttendanceStatus::Absent);
        assert!(entry.check_in.is_none());
        assert!(entry.check_out.is_none());
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = make_entry(
            Some(make_datetime("2025-06-02", "09:00:00")),
            Some(make_datetime("2025-06-02", "18:00:00")),
        );
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AttendanceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
