//! Pay policy types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. [`PayPolicy::default`] is the
//! built-in policy and matches the shipped `config/default` directory.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalendarFlag;

/// Hourly base rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRates {
    /// Rate per hour for shifts worked in the control room.
    pub control_room: Decimal,
    /// Rate per hour for every other shift.
    pub standard: Decimal,
}

impl BaseRates {
    /// Selects the base rate from control-room status.
    pub fn for_shift(&self, in_control_room: bool) -> Decimal {
        if in_control_room {
            self.control_room
        } else {
            self.standard
        }
    }
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            control_room: Decimal::new(60, 0),
            standard: Decimal::new(50, 0),
        }
    }
}

/// The predicate half of a [`MultiplierRule`].
///
/// The day test passes when `weekdays` and `flags` are both empty, when the
/// instant falls on one of `weekdays`, or when any of `flags` is set. The hour
/// test requires `hour >= from_hour` and `hour < before_hour` where given.
/// A condition matches when both tests pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCondition {
    /// Weekdays derived from the segment's start instant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<Weekday>,
    /// Caller-supplied calendar flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<CalendarFlag>,
    /// Inclusive lower bound on the clock hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_hour: Option<u32>,
    /// Exclusive upper bound on the clock hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_hour: Option<u32>,
}

/// One row of the multiplier rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierRule {
    /// Stable identifier, reported on every segment the rule prices.
    pub id: String,
    /// Multiplier applied when the rule matches.
    pub multiplier: Decimal,
    /// When the rule applies.
    #[serde(default)]
    pub when: RuleCondition,
}

/// Ordered multiplier rules, evaluated first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Multiplier used when no rule matches.
    pub default_multiplier: Decimal,
    /// Rules in precedence order.
    pub rules: Vec<MultiplierRule>,
}

impl Default for RuleTable {
    /// The built-in precedence:
    ///
    /// 1. holiday, all day: 1.5
    /// 2. Friday or holiday eve from 16:00: 1.5
    /// 3. Saturday, all day: 1.5
    /// 4. last day of holiday before 04:00: 1.5
    /// 5. Sunday before 04:00: 1.5
    /// 6. otherwise: 1.0
    fn default() -> Self {
        let premium = Decimal::new(15, 1);
        Self {
            default_multiplier: Decimal::ONE,
            rules: vec![
                MultiplierRule {
                    id: "holiday".to_string(),
                    multiplier: premium,
                    when: RuleCondition {
                        flags: vec![CalendarFlag::Holiday],
                        ..RuleCondition::default()
                    },
                },
                MultiplierRule {
                    id: "friday_or_holiday_eve_evening".to_string(),
                    multiplier: premium,
                    when: RuleCondition {
                        weekdays: vec![Weekday::Fri],
                        flags: vec![CalendarFlag::HolidayEve],
                        from_hour: Some(16),
                        ..RuleCondition::default()
                    },
                },
                MultiplierRule {
                    id: "saturday".to_string(),
                    multiplier: premium,
                    when: RuleCondition {
                        weekdays: vec![Weekday::Sat],
                        ..RuleCondition::default()
                    },
                },
                MultiplierRule {
                    id: "last_day_of_holiday_early".to_string(),
                    multiplier: premium,
                    when: RuleCondition {
                        flags: vec![CalendarFlag::LastDayOfHoliday],
                        before_hour: Some(4),
                        ..RuleCondition::default()
                    },
                },
                MultiplierRule {
                    id: "sunday_early".to_string(),
                    multiplier: premium,
                    when: RuleCondition {
                        weekdays: vec![Weekday::Sun],
                        before_hour: Some(4),
                        ..RuleCondition::default()
                    },
                },
            ],
        }
    }
}

/// Flat travel reimbursement schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSchedule {
    /// Charge for any day without a special case.
    pub default_charge: Decimal,
    /// Friday start times before this get `friday_before_cutoff`.
    pub friday_cutoff: NaiveTime,
    /// Friday charge for starts before the cutoff.
    pub friday_before_cutoff: Decimal,
    /// Friday charge for starts at or after the cutoff.
    pub friday_after_cutoff: Decimal,
    /// Earliest start time of a Saturday night shift (inclusive).
    pub saturday_night_start: NaiveTime,
    /// Latest end time of a Saturday night shift (inclusive).
    pub saturday_night_end: NaiveTime,
    /// Charge for a Saturday night shift.
    pub saturday_night_charge: Decimal,
}

impl Default for TravelSchedule {
    fn default() -> Self {
        Self {
            default_charge: Decimal::new(12, 0),
            friday_cutoff: NaiveTime::from_hms_opt(15, 0, 0).expect("Valid time of day"),
            friday_before_cutoff: Decimal::new(12, 0),
            friday_after_cutoff: Decimal::new(40, 0),
            saturday_night_start: NaiveTime::from_hms_opt(23, 0, 0).expect("Valid time of day"),
            saturday_night_end: NaiveTime::from_hms_opt(7, 0, 0).expect("Valid time of day"),
            saturday_night_charge: Decimal::new(26, 0),
        }
    }
}

/// The complete pay policy: base rates, multiplier rules and travel schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Hourly base rates.
    pub base_rates: BaseRates,
    /// Multiplier rule table.
    pub multipliers: RuleTable,
    /// Travel reimbursement schedule.
    pub travel: TravelSchedule,
}

/// File layout of `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RatesConfig {
    pub(crate) base_rates: BaseRates,
}
