//! Priced shift breakdown.
//!
//! A [`ShiftPay`] is the full result of pricing one shift: one [`SegmentPay`]
//! per one-hour segment plus the summed total.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced result for a single segment of a shift.
///
/// # Example
///
/// ```
/// use shift_pay::models::SegmentPay;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let line = SegmentPay {
///     start: NaiveDateTime::parse_from_str("2026-01-16 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-01-16 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::ONE,
///     base_rate: Decimal::new(50, 0),
///     multiplier: Decimal::new(15, 1),
///     rule_id: Some("friday_or_holiday_eve_evening".to_string()),
///     amount: Decimal::new(75, 0),
/// };
/// assert_eq!(line.amount, line.hours * line.base_rate * line.multiplier);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPay {
    /// Start instant of the segment.
    pub start: NaiveDateTime,
    /// End instant of the segment.
    pub end: NaiveDateTime,
    /// Fractional hours in the segment.
    pub hours: Decimal,
    /// Hourly base rate applied.
    pub base_rate: Decimal,
    /// Pay multiplier in force at the segment start.
    pub multiplier: Decimal,
    /// Id of the rule that set the multiplier, `None` when the default applied.
    pub rule_id: Option<String>,
    /// `hours * base_rate * multiplier`.
    pub amount: Decimal,
}

/// The priced result for a whole shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPay {
    /// Per-segment lines, in chronological order.
    pub segments: Vec<SegmentPay>,
    /// Total worked hours.
    pub hours: Decimal,
    /// Sum of all segment amounts.
    pub total: Decimal,
}

impl ShiftPay {
    /// Builds a shift result from its segment lines, summing hours and amounts.
    pub fn from_segments(segments: Vec<SegmentPay>) -> Self {
        let hours = segments.iter().map(|s| s.hours).sum();
        let total = segments.iter().map(|s| s.amount).sum();
        Self {
            segments,
            hours,
            total,
        }
    }

    /// Hours priced above `baseline`, normally the rule table's default multiplier.
    ///
    /// A matched rule whose multiplier does not exceed the baseline adds nothing.
    pub fn premium_hours(&self, baseline: Decimal) -> Decimal {
        self.segments
            .iter()
            .filter(|s| s.multiplier > baseline)
            .map(|s| s.hours)
            .sum()
    }
}
