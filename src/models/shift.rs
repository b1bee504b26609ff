//! Shift request model and calendar context flags.
//!
//! This module defines the [`ShiftRequest`] handed to the pay calculation and
//! the [`ShiftFlags`] that carry caller-supplied calendar context.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Names one of the caller-supplied calendar flags.
///
/// Used by multiplier rules that key on the flags a caller passed in rather
/// than on the weekday derived from a segment's instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarFlag {
    /// The shift date is a Friday.
    Friday,
    /// The shift date is a Saturday.
    Saturday,
    /// The shift date is a recognized holiday.
    Holiday,
    /// The shift date is the day before a recognized holiday.
    HolidayEve,
    /// The shift date is the last day of a multi-day holiday.
    LastDayOfHoliday,
}

/// Calendar context for one shift.
///
/// The flags are trusted as given. Keeping `is_friday` and `is_saturday`
/// consistent with the shift date is the caller's job; [`ShiftFlags::from_date`]
/// is available for callers that do not track them separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftFlags {
    /// The shift date is a Friday.
    #[serde(default)]
    pub is_friday: bool,
    /// The shift date is a Saturday.
    #[serde(default)]
    pub is_saturday: bool,
    /// The shift date is a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// The shift date is a holiday eve.
    #[serde(default)]
    pub is_holiday_eve: bool,
    /// The shift date is the last day of a holiday.
    #[serde(default)]
    pub is_last_day_of_holiday: bool,
}

impl ShiftFlags {
    /// Derives the weekday flags from a calendar date.
    ///
    /// Holiday flags cannot be derived and are left unset.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay::models::ShiftFlags;
    /// use chrono::NaiveDate;
    ///
    /// // 2026-01-16 is a Friday
    /// let flags = ShiftFlags::from_date(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
    /// assert!(flags.is_friday);
    /// assert!(!flags.is_saturday);
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            is_friday: date.weekday() == Weekday::Fri,
            is_saturday: date.weekday() == Weekday::Sat,
            ..Self::default()
        }
    }

    /// Returns whether the named flag is set.
    pub fn is_set(&self, flag: CalendarFlag) -> bool {
        match flag {
            CalendarFlag::Friday => self.is_friday,
            CalendarFlag::Saturday => self.is_saturday,
            CalendarFlag::Holiday => self.is_holiday,
            CalendarFlag::HolidayEve => self.is_holiday_eve,
            CalendarFlag::LastDayOfHoliday => self.is_last_day_of_holiday,
        }
    }
}

/// A single shift to be priced.
///
/// Start and end are naive wall-clock times on the nominal `date`. An end time
/// before the start time means the shift runs past midnight. Equal start and
/// end times are rejected when the shift is priced.
///
/// # Example
///
/// ```
/// use shift_pay::models::{ShiftFlags, ShiftRequest};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let request = ShiftRequest {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     start_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(0, 30, 0).unwrap(),
///     in_control_room: false,
///     flags: ShiftFlags::default(),
/// };
/// assert!(request.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The nominal date of the shift.
    pub date: NaiveDate,
    /// The wall-clock start time.
    pub start_time: NaiveTime,
    /// The wall-clock end time.
    pub end_time: NaiveTime,
    /// Whether the shift is worked in the control room (higher base rate).
    #[serde(default)]
    pub in_control_room: bool,
    /// Calendar context for the shift.
    #[serde(flatten)]
    pub flags: ShiftFlags,
}

impl ShiftRequest {
    /// The start time combined with the nominal date.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// The end time combined with the nominal date, before any overnight adjustment.
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Returns true when the end time is earlier than the start time.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_flags_from_friday_date() {
        let flags = ShiftFlags::from_date(make_date("2026-01-16"));
        assert!(flags.is_friday);
        assert!(!flags.is_saturday);
        assert!(!flags.is_holiday);
    }

    #[test]
    fn test_flags_from_saturday_date() {
        let flags = ShiftFlags::from_date(make_date("2026-01-17"));
        assert!(!flags.is_friday);
        assert!(flags.is_saturday);
    }

    #[test]
    fn test_flags_from_tuesday_date_are_all_unset() {
        assert_eq!(
            ShiftFlags::from_date(make_date("2026-01-13")),
            ShiftFlags::default()
        );
    }

    #[test]
    fn test_is_set_maps_each_flag() {
        let flags = ShiftFlags {
            is_holiday_eve: true,
            is_last_day_of_holiday: true,
            ..ShiftFlags::default()
        };
        assert!(flags.is_set(CalendarFlag::HolidayEve));
        assert!(flags.is_set(CalendarFlag::LastDayOfHoliday));
        assert!(!flags.is_set(CalendarFlag::Holiday));
        assert!(!flags.is_set(CalendarFlag::Friday));
        assert!(!flags.is_set(CalendarFlag::Saturday));
    }

    #[test]
    fn test_datetimes_share_the_nominal_date() {
        let request = ShiftRequest {
            date: make_date("2026-01-17"),
            start_time: make_time("22:00"),
            end_time: make_time("06:00"),
            in_control_room: false,
            flags: ShiftFlags::default(),
        };
        assert_eq!(request.start_datetime().date(), make_date("2026-01-17"));
        assert_eq!(request.end_datetime().date(), make_date("2026-01-17"));
        assert!(request.crosses_midnight());
    }

    #[test]
    fn test_deserialize_with_flat_flags() {
        let json = r#"{
            "date": "2026-01-16",
            "start_time": "15:00:00",
            "end_time": "17:00:00",
            "in_control_room": true,
            "is_friday": true
        }"#;

        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert!(request.in_control_room);
        assert!(request.flags.is_friday);
        assert!(!request.flags.is_holiday);
        assert_eq!(request.start_time, make_time("15:00"));
    }

    #[test]
    fn test_calendar_flag_serializes_snake_case() {
        let json = serde_json::to_string(&CalendarFlag::LastDayOfHoliday).unwrap();
        assert_eq!(json, "\"last_day_of_holiday\"");
    }
}
