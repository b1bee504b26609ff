//! Per-day pay record stored by a [`Ledger`](crate::calculation::Ledger).

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced outcome of one shift.
///
/// Created once per successfully priced shift and never modified afterwards.
///
/// # Example
///
/// ```
/// use shift_pay::models::DailyRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let record = DailyRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     pay: Decimal::new(125, 0),
/// };
/// assert_eq!(
///     record.to_string(),
///     "Date: 2026-01-16, Start Time: 15:00, End Time: 17:00, Pay: 125.00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The nominal date of the shift.
    pub date: NaiveDate,
    /// The wall-clock start time.
    pub start_time: NaiveTime,
    /// The wall-clock end time.
    pub end_time: NaiveTime,
    /// The total pay for the shift.
    pub pay: Decimal,
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Start Time: {}, End Time: {}, Pay: {:.2}",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.pay.round_dp(2)
        )
    }
}
