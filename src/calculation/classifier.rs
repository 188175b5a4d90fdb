//! Attendance classification.
//!
//! The primary label of an attendance entry is its stored status, unchanged.
//! On top of that, two derived conditions are computed against the policy's
//! required-duration threshold: `less_worked` (worked duration below the
//! threshold, independent of the stored status) and `valid attendance`
//! (Present with a punch pair lasting at least the threshold). A check-out
//! recorded before the check-in yields a negative duration and counts as
//! less-worked rather than raising an error.

use crate::config::PayrollPolicy;
use crate::models::{AttendanceEntry, AttendanceStatus};

/// Returns whether the entry worked less than the required duration.
///
/// True only when both punches are present and the worked duration in
/// minutes is strictly below `policy.required_minutes`. This condition is
/// additive with the stored status: a day can be both `Present` and
/// less-worked.
pub fn is_less_worked(entry: &AttendanceEntry, policy: &PayrollPolicy) -> bool {
    entry
        .worked_minutes()
        .is_some_and(|minutes| minutes < policy.required_minutes)
}

/// Returns whether the entry counts as a valid attendance day.
///
/// Requires status `Present`, both punches recorded, and a worked duration
/// of at least `policy.required_minutes`.
pub fn is_valid_attendance(entry: &AttendanceEntry, policy: &PayrollPolicy) -> bool {
    entry.status == AttendanceStatus::Present
        && entry
            .worked_minutes()
            .is_some_and(|minutes| minutes >= policy.required_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn entry_with(
        status: AttendanceStatus,
        check_in: Option<&str>,
        check_out: Option<&str>,
    ) -> AttendanceEntry {
        AttendanceEntry {
            id: "att_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status,
            check_in: check_in.map(make_datetime),
            check_out: check_out.map(make_datetime),
        }
    }

    /// AC-001: 540 minutes meets the 525-minute default
    #[test]
    fn test_full_day_is_valid_and_not_less_worked() {
        let entry = entry_with(
            AttendanceStatus::Present,
            Some("2025-06-02 09:00:00"),
            Some("2025-06-02 18:00:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(is_valid_attendance(&entry, &policy));
        assert!(!is_less_worked(&entry, &policy));
    }

    /// AC-002: exactly 525 minutes is sufficient
    #[test]
    fn test_exact_threshold_is_valid() {
        let entry = entry_with(
            AttendanceStatus::Present,
            Some("2025-06-02 09:00:00"),
            Some("2025-06-02 17:45:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(is_valid_attendance(&entry, &policy));
        assert!(!is_less_worked(&entry, &policy));
    }

    /// AC-003: a 360-minute Present day is less-worked and invalid,
    /// while the stored status stays Present
    #[test]
    fn test_short_present_day() {
        let entry = entry_with(
            AttendanceStatus::Present,
            Some("2025-06-02 09:00:00"),
            Some("2025-06-02 15:00:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(!is_valid_attendance(&entry, &policy));
        assert!(is_less_worked(&entry, &policy));
        assert_eq!(entry.status, AttendanceStatus::Present);
    }

    /// AC-004: less-worked is independent of the stored status
    #[test]
    fn test_less_worked_on_non_present_status() {
        let entry = entry_with(
            AttendanceStatus::Late,
            Some("2025-06-02 11:00:00"),
            Some("2025-06-02 15:00:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(is_less_worked(&entry, &policy));
        assert!(!is_valid_attendance(&entry, &policy));
    }

    /// AC-005: missing punches are neither valid nor less-worked
    #[test]
    fn test_missing_punches() {
        let entry = entry_with(AttendanceStatus::Present, Some("2025-06-02 09:00:00"), None);
        let policy = PayrollPolicy::default();
        assert!(!is_valid_attendance(&entry, &policy));
        assert!(!is_less_worked(&entry, &policy));
    }

    /// AC-006: a Present day with sufficient duration but non-Present
    /// status is not valid attendance
    #[test]
    fn test_non_present_long_day_is_not_valid() {
        let entry = entry_with(
            AttendanceStatus::HalfDay,
            Some("2025-06-02 09:00:00"),
            Some("2025-06-02 18:00:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(!is_valid_attendance(&entry, &policy));
    }

    /// AC-007: check-out before check-in counts as less-worked, never panics
    #[test]
    fn test_inverted_punches_are_less_worked() {
        let entry = entry_with(
            AttendanceStatus::Present,
            Some("2025-06-02 18:00:00"),
            Some("2025-06-02 09:00:00"),
        );
        let policy = PayrollPolicy::default();
        assert!(is_less_worked(&entry, &policy));
        assert!(!is_valid_attendance(&entry, &policy));
    }

    /// AC-008: the threshold is overridable policy, not a literal
    #[test]
    fn test_custom_threshold() {
        let entry = entry_with(
            AttendanceStatus::Present,
            Some("2025-06-02 09:00:00"),
            Some("2025-06-02 15:00:00"),
        );
        let policy = PayrollPolicy {
            required_minutes: 300,
            ..PayrollPolicy::default()
        };
        assert!(is_valid_attendance(&entry, &policy));
        assert!(!is_less_worked(&entry, &policy));
    }
}
