//! Monthly payroll reconciliation and attendance analytics engine.
//!
//! This crate takes an employee's raw attendance punches and submitted work
//! reports for a calendar month and derives the monthly payroll split
//! (earnings vs. deductions against a fixed salary) together with chart-ready
//! categorical distributions for reporting.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
