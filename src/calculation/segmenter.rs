//! One-hour shift segmentation.
//!
//! This module splits a shift interval into consecutive segments of at most
//! one hour, so that each segment can be priced with the multiplier in force
//! at its start.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A sub-interval of a shift, at most one hour long.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::TimeSegment;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let segment = TimeSegment {
///     start: NaiveDateTime::parse_from_str("2026-01-13 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-01-14 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(segment.hours(), Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSegment {
    /// Start instant (inclusive).
    pub start: NaiveDateTime,
    /// End instant (exclusive).
    pub end: NaiveDateTime,
}

impl TimeSegment {
    /// Elapsed wall-clock time as fractional hours (seconds / 3600).
    pub fn hours(&self) -> Decimal {
        calculate_hours(self.start, self.end)
    }
}

/// Lazy iterator over the one-hour segments of a shift.
///
/// Cloning the iterator restarts it from the same position, so a caller can
/// walk the segments more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSegments {
    current: NaiveDateTime,
    end: NaiveDateTime,
}

impl ShiftSegments {
    /// The (possibly next-day) end instant of the shift.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Total hours remaining in the iterator.
    pub fn total_hours(&self) -> Decimal {
        calculate_hours(self.current, self.end)
    }
}

impl Iterator for ShiftSegments {
    type Item = TimeSegment;

    fn next(&mut self) -> Option<TimeSegment> {
        if self.current >= self.end {
            return None;
        }

        let next_hour = self
            .current
            .checked_add_signed(Duration::hours(1))
            .map_or(self.end, |next| next.min(self.end));
        let segment = TimeSegment {
            start: self.current,
            end: next_hour,
        };
        self.current = next_hour;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let nanos = remaining_nanos(self.current, self.end);
        let count = nanos.div_ceil(NANOS_PER_HOUR) as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for ShiftSegments {}

/// Splits a shift into one-hour segments.
///
/// Both instants are expected on the same civil date. An end at or before the
/// start is an overnight shift: the end is moved forward by one calendar day.
/// Segments run from the start in one-hour steps; the last one may be shorter.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidShift`] when start and end are the same
/// instant, or when an overnight end falls outside the representable range.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::segment_shift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-13 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-13 00:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let segments: Vec<_> = segment_shift(start, end).unwrap().collect();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].hours(), Decimal::new(5, 1));
/// assert_eq!(segments[1].start.format("%H:%M").to_string(), "00:00");
/// ```
pub fn segment_shift(start: NaiveDateTime, end: NaiveDateTime) -> PayrollResult<ShiftSegments> {
    if start == end {
        return Err(invalid(start, end, "start time cannot be equal to end time"));
    }

    let end = if end <= start {
        end.checked_add_signed(Duration::days(1))
            .ok_or_else(|| invalid(start, end, "shift end is out of range"))?
    } else {
        end
    };

    Ok(ShiftSegments {
        current: start,
        end,
    })
}

const NANOS_PER_HOUR: u64 = 3_600_000_000_000;

fn invalid(start: NaiveDateTime, end: NaiveDateTime, message: &str) -> PayrollError {
    PayrollError::InvalidShift {
        date: start.date(),
        start_time: start.time(),
        end_time: end.time(),
        message: message.to_string(),
    }
}

/// Non-negative nanoseconds from `start` to `end`, saturating.
fn remaining_nanos(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    (end - start)
        .num_nanoseconds()
        .map_or(u64::MAX, |nanos| nanos.max(0) as u64)
}

/// Calculates the number of hours between two datetimes, to the nanosecond.
fn calculate_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    match (end - start).num_nanoseconds() {
        Some(nanos) => Decimal::from(nanos) / Decimal::from(NANOS_PER_HOUR),
        None => Decimal::from((end - start).num_seconds()) / Decimal::from(3600),
    }
}
