//! Shift payroll engine.
//!
//! This crate prices hourly shifts from timesheet data. A shift is split into
//! one-hour segments, each segment is priced with the pay multiplier that
//! applies at its start instant (weekday and holiday premiums, overnight rules),
//! and the segment amounts are summed. A flat travel reimbursement is computed
//! alongside from the day of week and the shift boundaries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
