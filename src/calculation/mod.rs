//! Calculation logic for the payroll reconciliation engine.
//!
//! This module contains the calendar window construction, per-day record
//! matching, attendance classification, the monthly payroll reconciler, and
//! the categorical distribution aggregator.

mod calendar;
mod classifier;
mod distribution;
mod matcher;
mod reconciler;

pub use calendar::{
    StepDirection, ViewMode, WEEK_START, days_in_month, parse_calendar_date, parse_timestamp,
    step, window_days,
};
pub use classifier::{is_less_worked, is_valid_attendance};
pub use distribution::{
    LESS_WORKED_LABEL, attendance_distribution, productivity_distribution,
    work_report_distribution,
};
pub use matcher::{DayRecords, match_day};
pub use reconciler::reconcile_month;
