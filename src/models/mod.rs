//! Core data models for the shift payroll engine.
//!
//! This module contains the domain models shared by the calculation and API layers.

mod calculation_result;
mod daily_record;
mod shift;
mod shift_pay;

pub use calculation_result::{CalculationResult, DayResult, PayTotals};
pub use daily_record::DailyRecord;
pub use shift::{CalendarFlag, ShiftFlags, ShiftRequest};
pub use shift_pay::{SegmentPay, ShiftPay};
