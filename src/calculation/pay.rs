//! Per-shift pay calculation.
//!
//! This module combines the segmenter and the multiplier resolver: each
//! segment is priced as `base_rate * multiplier * hours` and the segment
//! amounts are summed into the shift total. Nothing is stored here; see
//! [`Ledger`](super::Ledger) for running totals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{SegmentPay, ShiftPay, ShiftRequest};

use super::{resolve_multiplier, segment_shift};

/// Prices a shift under the given policy, returning the per-segment breakdown.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidShift`](crate::error::PayrollError::InvalidShift)
/// for a zero-length shift.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::compute_pay_for_shift;
/// use shift_pay::config::PayPolicy;
/// use shift_pay::models::{ShiftFlags, ShiftRequest};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // Friday 15:00-17:00: one ordinary hour, one evening hour at 1.5x
/// let request = ShiftRequest {
///     date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     in_control_room: false,
///     flags: ShiftFlags { is_friday: true, ..ShiftFlags::default() },
/// };
///
/// let pay = compute_pay_for_shift(&request, &PayPolicy::default()).unwrap();
/// assert_eq!(pay.segments.len(), 2);
/// assert_eq!(pay.total, Decimal::new(125, 0));
/// ```
pub fn compute_pay_for_shift(request: &ShiftRequest, policy: &PayPolicy) -> PayrollResult<ShiftPay> {
    let base_rate = policy.base_rates.for_shift(request.in_control_room);
    let segments = segment_shift(request.start_datetime(), request.end_datetime())?;

    let lines: Vec<SegmentPay> = segments
        .map(|segment| {
            let resolution = resolve_multiplier(segment.start, &request.flags, &policy.multipliers);
            let hours = segment.hours();
            SegmentPay {
                start: segment.start,
                end: segment.end,
                hours,
                base_rate,
                multiplier: resolution.multiplier,
                rule_id: resolution.rule_id,
                amount: base_rate * resolution.multiplier * hours,
            }
        })
        .collect();

    let pay = ShiftPay::from_segments(lines);

    debug!(
        date = %request.date,
        start_time = %request.start_time,
        end_time = %request.end_time,
        segments = pay.segments.len(),
        total = %pay.total,
        "Priced shift"
    );

    Ok(pay)
}

/// Prices a shift under the built-in policy, returning only the total.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::compute_pay;
/// use shift_pay::models::{ShiftFlags, ShiftRequest};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let request = ShiftRequest {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     in_control_room: true,
///     flags: ShiftFlags::default(),
/// };
/// assert_eq!(compute_pay(&request).unwrap(), Decimal::new(60, 0));
/// ```
pub fn compute_pay(request: &ShiftRequest) -> PayrollResult<Decimal> {
    compute_pay_for_shift(request, &PayPolicy::default()).map(|pay| pay.total)
}
