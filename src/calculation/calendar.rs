//! Calendar window construction and calendar-date parsing.
//!
//! The reporting window is a pure function of an anchor date and a view
//! mode: month mode yields every day of the anchor's month regardless of
//! which day within the month was selected, week mode yields the week
//! containing the anchor. Record dates arrive from independently-sourced
//! collections as strings; [`parse_calendar_date`] normalizes them to an
//! explicit calendar-date value so matching never depends on time-of-day.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The weekday a view week starts on.
pub const WEEK_START: Weekday = Weekday::Sun;

/// The calendar window mode for the reporting view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// A Sunday-through-Saturday week containing the anchor.
    Week,
    /// Every day of the calendar month containing the anchor.
    #[default]
    Month,
}

/// Direction for stepping the calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Move the anchor one window forward.
    Forward,
    /// Move the anchor one window back.
    Back,
}

/// Returns the number of calendar days in the given month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] if the year/month pair does not
/// denote a real calendar month.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2025, 6).unwrap(), 30);
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert!(days_in_month(2025, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { year, month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { year, month })?;
    Ok((next_first - first).num_days() as u32)
}

/// Produces the ordered, inclusive day sequence for the window containing
/// `anchor`.
///
/// Month mode always yields every day of the anchor's month; week mode
/// yields the [`WEEK_START`]-based week containing the anchor.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::{window_days, ViewMode};
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
/// let month = window_days(anchor, ViewMode::Month);
/// assert_eq!(month.len(), 30);
/// assert_eq!(month[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
///
/// let week = window_days(anchor, ViewMode::Week);
/// assert_eq!(week.len(), 7);
/// assert!(week.contains(&anchor));
/// ```
pub fn window_days(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Week => {
            let offset = anchor.weekday().days_since(WEEK_START) as i64;
            let start = anchor - Duration::days(offset);
            start.iter_days().take(7).collect()
        }
        ViewMode::Month => anchor
            .with_day(1)
            .into_iter()
            .flat_map(|first| {
                first
                    .iter_days()
                    .take_while(move |day| {
                        day.month() == anchor.month() && day.year() == anchor.year()
                    })
            })
            .collect(),
    }
}

/// Moves the anchor by exactly one week or one calendar month.
///
/// Month steps preserve the day-of-month where it exists in the target
/// month and clamp otherwise (Jan 31 forward lands on the last day of
/// February).
pub fn step(anchor: NaiveDate, mode: ViewMode, direction: StepDirection) -> NaiveDate {
    match (mode, direction) {
        (ViewMode::Week, StepDirection::Forward) => anchor + Duration::days(7),
        (ViewMode::Week, StepDirection::Back) => anchor - Duration::days(7),
        // checked_add/sub_months only fail at the ends of the representable
        // date range; the anchor is left in place there.
        (ViewMode::Month, StepDirection::Forward) => {
            anchor.checked_add_months(Months::new(1)).unwrap_or(anchor)
        }
        (ViewMode::Month, StepDirection::Back) => {
            anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor)
        }
    }
}

/// Parses a stored record date into a calendar date.
///
/// Accepts plain dates (`2025-06-02`), RFC 3339 timestamps
/// (`2025-06-02T09:00:00+05:30`), and offset-less timestamps with either a
/// `T` or space separator. Timestamps are truncated to their local calendar
/// date. Returns `None` for anything else; the caller excludes that single
/// record from all tallies.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local().date());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp.date());
        }
    }
    None
}

/// Parses a check-in/check-out punch into a local timestamp.
///
/// Accepts the same timestamp formats as [`parse_calendar_date`]. Returns
/// `None` for a malformed punch, which the caller treats as a missing punch.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }
    None
}
