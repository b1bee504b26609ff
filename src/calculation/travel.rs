//! Travel reimbursement calculation.
//!
//! A flat per-shift charge chosen from the day of week and the shift's
//! boundary times. Independent of the pay calculation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TravelSchedule;

/// Which branch of the travel schedule applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelBand {
    /// No special case: the default charge.
    Standard,
    /// Friday, starting before the cutoff.
    FridayBeforeCutoff,
    /// Friday, starting at or after the cutoff.
    FridayAfterCutoff,
    /// Saturday night shift.
    SaturdayNight,
}

/// The travel reimbursement for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelCharge {
    /// The nominal date of the shift.
    pub date: NaiveDate,
    /// The schedule branch that applied.
    pub band: TravelBand,
    /// The flat amount.
    pub amount: Decimal,
}

/// Calculates the travel charge for a shift under `schedule`.
///
/// - Friday: start before `friday_cutoff` gets `friday_before_cutoff`, otherwise
///   `friday_after_cutoff`.
/// - Saturday (when not Friday): start at or after `saturday_night_start` and end
///   at or before `saturday_night_end` gets `saturday_night_charge`.
/// - Everything else gets `default_charge`.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::{calculate_travel_charge, TravelBand};
/// use shift_pay::config::TravelSchedule;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let charge = calculate_travel_charge(
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
///     true,
///     false,
///     &TravelSchedule::default(),
/// );
/// assert_eq!(charge.band, TravelBand::FridayAfterCutoff);
/// assert_eq!(charge.amount, Decimal::new(40, 0));
/// ```
pub fn calculate_travel_charge(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_friday: bool,
    is_saturday: bool,
    schedule: &TravelSchedule,
) -> TravelCharge {
    let (band, amount) = if is_friday {
        if start_time < schedule.friday_cutoff {
            (TravelBand::FridayBeforeCutoff, schedule.friday_before_cutoff)
        } else {
            (TravelBand::FridayAfterCutoff, schedule.friday_after_cutoff)
        }
    } else if is_saturday
        && start_time >= schedule.saturday_night_start
        && end_time <= schedule.saturday_night_end
    {
        (TravelBand::SaturdayNight, schedule.saturday_night_charge)
    } else {
        (TravelBand::Standard, schedule.default_charge)
    };

    TravelCharge { date, band, amount }
}

/// Calculates the travel charge under the built-in schedule, returning the amount.
pub fn compute_travel_charge(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_friday: bool,
    is_saturday: bool,
) -> Decimal {
    calculate_travel_charge(
        date,
        start_time,
        end_time,
        is_friday,
        is_saturday,
        &TravelSchedule::default(),
    )
    .amount
}
