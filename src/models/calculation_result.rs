//! Calculation result models for a priced timesheet.
//!
//! This module contains the [`CalculationResult`] type returned for a whole
//! timesheet, with one [`DayResult`] per priced row and the aggregated
//! [`PayTotals`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SegmentPay;

/// The priced outcome of one timesheet row.
///
/// Rows without entry or exit time carry `None` times, zero pay, zero travel
/// and no segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The nominal date of the row.
    pub date: NaiveDate,
    /// The role worked.
    pub role: String,
    /// The wall-clock start time, if recorded.
    pub start_time: Option<NaiveTime>,
    /// The wall-clock end time, if recorded.
    pub end_time: Option<NaiveTime>,
    /// Whether the shift was worked in the control room.
    pub in_control_room: bool,
    /// Pay for the shift, rounded to cents.
    pub pay: Decimal,
    /// Travel reimbursement for the shift.
    pub travel_charge: Decimal,
    /// Per-segment pricing.
    pub segments: Vec<SegmentPay>,
}

/// Aggregated totals for a timesheet.
///
/// # Example
///
/// ```
/// use shift_pay::models::PayTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = PayTotals {
///     total_hours: Decimal::from_str("10.0").unwrap(),
///     premium_hours: Decimal::from_str("2.0").unwrap(),
///     total_pay: Decimal::from_str("550.00").unwrap(),
///     total_travel: Decimal::from_str("24").unwrap(),
///     grand_total: Decimal::from_str("574.00").unwrap(),
/// };
/// assert_eq!(totals.grand_total, totals.total_pay + totals.total_travel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Total worked hours across priced rows.
    pub total_hours: Decimal,
    /// Hours priced by a premium rule.
    pub premium_hours: Decimal,
    /// Sum of shift pay, rounded to cents.
    pub total_pay: Decimal,
    /// Sum of travel charges.
    pub total_travel: Decimal,
    /// `total_pay + total_travel`.
    pub grand_total: Decimal,
}

/// The complete result of pricing a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// One entry per priced row, in input order.
    pub days: Vec<DayResult>,
    /// Rows skipped because no role was recorded.
    pub skipped_rows: usize,
    /// Aggregated totals.
    pub totals: PayTotals,
}
