//! Domain models for the payroll reconciliation engine.
//!
//! Contains the attendance, work-report, payroll, and distribution types
//! exchanged between the persistence boundary and the calculation core.

mod attendance;
mod distribution;
mod payroll;
mod work_report;

pub use attendance::{AttendanceEntry, AttendanceStatus};
pub use distribution::{DistributionSeries, DistributionSlice};
pub use payroll::{PayrollProfile, PayrollSummary};
pub use work_report::{ReportStatus, WorkReportEntry};
