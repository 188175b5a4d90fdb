//! Categorical distribution aggregation.
//!
//! Three independent tallies over the same day sequence: the attendance
//! status mix (plus the additive less-worked category), the work-report
//! status mix (plus not-submitted days), and the derived productivity
//! split. Zero-count categories are computed but dropped from the emitted
//! series.

use chrono::NaiveDate;

use crate::config::PayrollPolicy;
use crate::models::{
    AttendanceEntry, AttendanceStatus, DistributionSeries, ReportStatus, WorkReportEntry,
};

use super::classifier::is_less_worked;
use super::matcher::match_day;

/// Label of the derived less-worked attendance category.
pub const LESS_WORKED_LABEL: &str = "less_worked";

/// Tallies the attendance status mix over `days`.
///
/// Each day's matched entry counts once under its stored status; entries
/// below the required duration additionally count under
/// [`LESS_WORKED_LABEL`]. The emitted counts therefore sum to the number of
/// matched entries plus the number of less-worked entries.
pub fn attendance_distribution(
    days: &[NaiveDate],
    attendance: &[AttendanceEntry],
    policy: &PayrollPolicy,
) -> DistributionSeries {
    let mut status_counts = [0u32; 6];
    let mut less_worked = 0u32;

    for day in days {
        let records = match_day(*day, attendance, &[]);
        if let Some(entry) = records.attendance {
            let index = AttendanceStatus::all()
                .iter()
                .position(|status| *status == entry.status)
                .unwrap_or(0);
            status_counts[index] += 1;
            if is_less_worked(entry, policy) {
                less_worked += 1;
            }
        }
    }

    let counts = AttendanceStatus::all()
        .into_iter()
        .zip(status_counts)
        .map(|(status, count)| (status.label(), count))
        .chain(std::iter::once((LESS_WORKED_LABEL, less_worked)));
    DistributionSeries::from_counts("attendance", counts)
}

/// Tallies the work-report status mix over `days`.
///
/// Days with no matched report fall into `not_submitted`, so the emitted
/// counts (including dropped zeroes) always sum to the number of days.
pub fn work_report_distribution(
    days: &[NaiveDate],
    reports: &[WorkReportEntry],
) -> DistributionSeries {
    let (approved, pending, rejected) = tally_reports(days, reports);
    let not_submitted = days.len() as u32 - (approved + pending + rejected);

    DistributionSeries::from_counts(
        "work_reports",
        [
            (ReportStatus::Approved.label(), approved),
            (ReportStatus::Pending.label(), pending),
            (ReportStatus::Rejected.label(), rejected),
            ("not_submitted", not_submitted),
        ],
    )
}

/// Derives the productivity split from the work-report mix over `days`.
///
/// Each bucket is an independently floored percentage of the submitted
/// reports (`productive` from approved, `average` from pending, `low` from
/// rejected). Unsubmitted days are excluded from the denominator, and the
/// floored values are not renormalized, so the emitted buckets may sum to
/// slightly less than 100. All buckets are zero when nothing was submitted.
pub fn productivity_distribution(
    days: &[NaiveDate],
    reports: &[WorkReportEntry],
) -> DistributionSeries {
    let (approved, pending, rejected) = tally_reports(days, reports);
    let total = approved + pending + rejected;

    let percent = |count: u32| if total == 0 { 0 } else { count * 100 / total };

    DistributionSeries::from_counts(
        "productivity",
        [
            ("productive", percent(approved)),
            ("average", percent(pending)),
            ("low", percent(rejected)),
        ],
    )
}

/// Counts matched reports per status over the day sequence.
fn tally_reports(days: &[NaiveDate], reports: &[WorkReportEntry]) -> (u32, u32, u32) {
    let mut approved = 0u32;
    let mut pending = 0u32;
    let mut rejected = 0u32;

    for day in days {
        let records = match_day(*day, &[], reports);
        match records.report.map(|report| report.status) {
            Some(ReportStatus::Approved) => approved += 1,
            Some(ReportStatus::Pending) => pending += 1,
            Some(ReportStatus::Rejected) => rejected += 1,
            None => {}
        }
    }

    (approved, pending, rejected)
}
