//! Pay multiplier resolution.
//!
//! Resolves the multiplier in force at an instant by walking the policy's
//! [`RuleTable`] in order and taking the first rule whose condition matches.
//! The weekday is taken from the instant itself, so a segment that has rolled
//! past midnight is priced as the following day.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{MultiplierRule, RuleCondition, RuleTable};
use crate::models::ShiftFlags;

/// The multiplier chosen for an instant, and the rule that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierResolution {
    /// The dimensionless pay multiplier.
    pub multiplier: Decimal,
    /// Id of the matching rule, or `None` when the table default applied.
    pub rule_id: Option<String>,
}

/// Resolves the pay multiplier for an instant.
///
/// Pure and total: every instant resolves, falling back to the table's
/// `default_multiplier` when no rule matches.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::resolve_multiplier;
/// use shift_pay::config::RuleTable;
/// use shift_pay::models::ShiftFlags;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let rules = RuleTable::default();
///
/// // 2026-01-16 is a Friday
/// let evening = NaiveDateTime::parse_from_str("2026-01-16 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let resolution = resolve_multiplier(evening, &ShiftFlags::default(), &rules);
/// assert_eq!(resolution.multiplier, Decimal::new(15, 1));
/// assert_eq!(resolution.rule_id.as_deref(), Some("friday_or_holiday_eve_evening"));
/// ```
pub fn resolve_multiplier(
    instant: NaiveDateTime,
    flags: &ShiftFlags,
    rules: &RuleTable,
) -> MultiplierResolution {
    match rules
        .rules
        .iter()
        .find(|rule| rule.when.matches(instant, flags))
    {
        Some(MultiplierRule { id, multiplier, .. }) => MultiplierResolution {
            multiplier: *multiplier,
            rule_id: Some(id.clone()),
        },
        None => MultiplierResolution {
            multiplier: rules.default_multiplier,
            rule_id: None,
        },
    }
}

impl RuleCondition {
    /// Returns true when both the day test and the hour test pass.
    pub fn matches(&self, instant: NaiveDateTime, flags: &ShiftFlags) -> bool {
        self.day_matches(instant, flags) && self.hour_matches(instant.hour())
    }

    fn day_matches(&self, instant: NaiveDateTime, flags: &ShiftFlags) -> bool {
        if self.weekdays.is_empty() && self.flags.is_empty() {
            return true;
        }
        self.weekdays.contains(&instant.weekday()) || self.flags.iter().any(|f| flags.is_set(*f))
    }

    fn hour_matches(&self, hour: u32) -> bool {
        self.from_hour.is_none_or(|from| hour >= from)
            && self.before_hour.is_none_or(|before| hour < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarFlag;
    use chrono::Weekday;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn resolve(date: &str, time: &str, flags: ShiftFlags) -> MultiplierResolution {
        resolve_multiplier(make_datetime(date, time), &flags, &RuleTable::default())
    }

    fn no_flags() -> ShiftFlags {
        ShiftFlags::default()
    }

    // 2026-01-13 Tuesday, 2026-01-16 Friday, 2026-01-17 Saturday, 2026-01-18 Sunday

    #[test]
    fn test_ordinary_weekday_is_default() {
        let resolution = resolve("2026-01-13", "10:00:00", no_flags());
        assert_eq!(resolution.multiplier, dec("1.0"));
        assert_eq!(resolution.rule_id, None);
    }

    #[test]
    fn test_holiday_overrides_weekday_and_hour() {
        let flags = ShiftFlags {
            is_holiday: true,
            ..no_flags()
        };
        let resolution = resolve("2026-01-13", "10:00:00", flags);
        assert_eq!(resolution.multiplier, dec("1.5"));
        assert_eq!(resolution.rule_id.as_deref(), Some("holiday"));
    }

    #[test]
    fn test_holiday_precedes_saturday() {
        let flags = ShiftFlags {
            is_holiday: true,
            ..no_flags()
        };
        let resolution = resolve("2026-01-17", "10:00:00", flags);
        assert_eq!(resolution.rule_id.as_deref(), Some("holiday"));
    }

    #[test]
    fn test_friday_before_1600_is_default() {
        let resolution = resolve("2026-01-16", "15:59:00", no_flags());
        assert_eq!(resolution.multiplier, dec("1.0"));
    }

    #[test]
    fn test_friday_from_1600_is_premium() {
        let resolution = resolve("2026-01-16", "16:00:00", no_flags());
        assert_eq!(resolution.multiplier, dec("1.5"));
        assert_eq!(
            resolution.rule_id.as_deref(),
            Some("friday_or_holiday_eve_evening")
        );
    }

    #[test]
    fn test_holiday_eve_evening_is_premium_on_any_weekday() {
        let flags = ShiftFlags {
            is_holiday_eve: true,
            ..no_flags()
        };
        assert_eq!(resolve("2026-01-13", "18:00:00", flags).multiplier, dec("1.5"));
        assert_eq!(resolve("2026-01-13", "12:00:00", flags).multiplier, dec("1.0"));
    }

    #[test]
    fn test_saturday_all_day_is_premium() {
        assert_eq!(resolve("2026-01-17", "00:00:00", no_flags()).multiplier, dec("1.5"));
        assert_eq!(resolve("2026-01-17", "12:00:00", no_flags()).multiplier, dec("1.5"));
        assert_eq!(
            resolve("2026-01-17", "23:59:00", no_flags()).rule_id.as_deref(),
            Some("saturday")
        );
    }

    #[test]
    fn test_last_day_of_holiday_before_0400_is_premium() {
        let flags = ShiftFlags {
            is_last_day_of_holiday: true,
            ..no_flags()
        };
        let early = resolve("2026-01-13", "03:00:00", flags);
        assert_eq!(early.multiplier, dec("1.5"));
        assert_eq!(early.rule_id.as_deref(), Some("last_day_of_holiday_early"));
        assert_eq!(resolve("2026-01-13", "04:00:00", flags).multiplier, dec("1.0"));
    }

    #[test]
    fn test_sunday_before_0400_is_premium() {
        let early = resolve("2026-01-18", "03:30:00", no_flags());
        assert_eq!(early.multiplier, dec("1.5"));
        assert_eq!(early.rule_id.as_deref(), Some("sunday_early"));
        assert_eq!(resolve("2026-01-18", "04:00:00", no_flags()).multiplier, dec("1.0"));
    }

    #[test]
    fn test_weekday_comes_from_instant_not_flags() {
        // Caller claims Friday, but the instant is a Tuesday evening.
        let flags = ShiftFlags {
            is_friday: true,
            ..no_flags()
        };
        assert_eq!(resolve("2026-01-13", "18:00:00", flags).multiplier, dec("1.0"));
    }

    #[test]
    fn test_custom_table_can_key_on_caller_flags() {
        let rules = RuleTable {
            default_multiplier: dec("1"),
            rules: vec![MultiplierRule {
                id: "flagged_friday".to_string(),
                multiplier: dec("2"),
                when: RuleCondition {
                    flags: vec![CalendarFlag::Friday],
                    ..RuleCondition::default()
                },
            }],
        };
        let flags = ShiftFlags {
            is_friday: true,
            ..no_flags()
        };

        let resolution =
            resolve_multiplier(make_datetime("2026-01-13", "09:00:00"), &flags, &rules);
        assert_eq!(resolution.multiplier, dec("2"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = RuleTable {
            default_multiplier: dec("1"),
            rules: vec![
                MultiplierRule {
                    id: "saturday_low".to_string(),
                    multiplier: dec("1.25"),
                    when: RuleCondition {
                        weekdays: vec![Weekday::Sat],
                        ..RuleCondition::default()
                    },
                },
                MultiplierRule {
                    id: "saturday_high".to_string(),
                    multiplier: dec("2"),
                    when: RuleCondition {
                        weekdays: vec![Weekday::Sat],
                        ..RuleCondition::default()
                    },
                },
            ],
        };

        let resolution =
            resolve_multiplier(make_datetime("2026-01-17", "09:00:00"), &no_flags(), &rules);
        assert_eq!(resolution.rule_id.as_deref(), Some("saturday_low"));
    }

    #[test]
    fn test_empty_table_always_returns_default() {
        let rules = RuleTable {
            default_multiplier: dec("1.1"),
            rules: vec![],
        };
        let resolution =
            resolve_multiplier(make_datetime("2026-01-17", "09:00:00"), &no_flags(), &rules);
        assert_eq!(resolution.multiplier, dec("1.1"));
        assert_eq!(resolution.rule_id, None);
    }

    #[test]
    fn test_condition_hour_window() {
        let condition = RuleCondition {
            from_hour: Some(22),
            before_hour: Some(24),
            ..RuleCondition::default()
        };
        assert!(condition.matches(make_datetime("2026-01-13", "22:00:00"), &no_flags()));
        assert!(condition.matches(make_datetime("2026-01-13", "23:59:00"), &no_flags()));
        assert!(!condition.matches(make_datetime("2026-01-13", "21:59:00"), &no_flags()));
    }
}
