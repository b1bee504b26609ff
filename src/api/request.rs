//! Request types for the shift payroll API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint: a timesheet made of rows in the shape of the imported
//! spreadsheet (Date, Role, Entry Time, Exit Time).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{ShiftFlags, ShiftRequest};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Timesheet rows, priced in order.
    pub rows: Vec<TimesheetRow>,
}

/// One timesheet row.
///
/// Times accept `HH:MM` or `HH:MM:SS`. `is_friday` and `is_saturday` are
/// derived from `date` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRow {
    /// The date worked.
    pub date: NaiveDate,
    /// The role worked; rows without one were not worked and are skipped.
    #[serde(default)]
    pub role: Option<String>,
    /// Entry time, if recorded.
    #[serde(default, with = "wall_clock")]
    pub entry_time: Option<NaiveTime>,
    /// Exit time, if recorded.
    #[serde(default, with = "wall_clock")]
    pub exit_time: Option<NaiveTime>,
    /// Whether the shift was in the control room.
    #[serde(default)]
    pub in_control_room: bool,
    /// Overrides the Friday flag derived from `date`.
    #[serde(default)]
    pub is_friday: Option<bool>,
    /// Overrides the Saturday flag derived from `date`.
    #[serde(default)]
    pub is_saturday: Option<bool>,
    /// The date is a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// The date is a holiday eve.
    #[serde(default)]
    pub is_holiday_eve: bool,
    /// The date is the last day of a holiday.
    #[serde(default)]
    pub is_last_day_of_holiday: bool,
}

impl TimesheetRow {
    /// The recorded role, unless it is missing, blank or `N/A`.
    pub fn worked_role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty() && !role.eq_ignore_ascii_case("n/a"))
    }

    /// Calendar flags for the row, deriving the weekday flags where not given.
    pub fn flags(&self) -> ShiftFlags {
        let derived = ShiftFlags::from_date(self.date);
        ShiftFlags {
            is_friday: self.is_friday.unwrap_or(derived.is_friday),
            is_saturday: self.is_saturday.unwrap_or(derived.is_saturday),
            is_holiday: self.is_holiday,
            is_holiday_eve: self.is_holiday_eve,
            is_last_day_of_holiday: self.is_last_day_of_holiday,
        }
    }

    /// The shift to price, or `None` when entry or exit time is missing.
    pub fn shift_request(&self) -> Option<ShiftRequest> {
        Some(ShiftRequest {
            date: self.date,
            start_time: self.entry_time?,
            end_time: self.exit_time?,
            in_control_room: self.in_control_room,
            flags: self.flags(),
        })
    }
}

/// Serde adapter for optional `HH:MM[:SS]` wall-clock times.
mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid time of day '{}'", raw)))
    }
}
