//! HTTP API for the payroll reconciliation engine.
//!
//! The engine core is a pure library computation; this module is the
//! web-request boundary that owns serialization for it.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceEntryRequest, EmployeeRequest, ReconcileRequest, WorkReportEntryRequest,
};
pub use response::{ApiError, ApiErrorResponse, DistributionSet, ReconcileResponse};
pub use state::AppState;
