//! HTTP API module for the shift payroll engine.
//!
//! This module provides the REST endpoint that prices a timesheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, TimesheetRow};
pub use response::ApiError;
pub use state::AppState;
