//! Running pay totals across shifts.
//!
//! A [`Ledger`] is the accumulating side of the pay calculation: each priced
//! shift is appended as a [`DailyRecord`], and totals are summed on demand.
//! Callers that only need one shift priced should use
//! [`compute_pay_for_shift`](super::compute_pay_for_shift) instead.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{DailyRecord, ShiftPay, ShiftRequest};

use super::compute_pay_for_shift;

/// Append-only list of priced days under one pay policy.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::Ledger;
/// use shift_pay::models::{ShiftFlags, ShiftRequest};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut ledger = Ledger::default();
/// ledger.add_work_day(&ShiftRequest {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     in_control_room: false,
///     flags: ShiftFlags::default(),
/// }).unwrap();
///
/// assert_eq!(ledger.total_pay(), Decimal::new(50, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    policy: PayPolicy,
    records: Vec<DailyRecord>,
}

impl Ledger {
    /// Creates an empty ledger that prices shifts under `policy`.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
        }
    }

    /// Prices a shift and appends its record.
    ///
    /// On error nothing is appended.
    pub fn add_work_day(&mut self, request: &ShiftRequest) -> PayrollResult<DailyRecord> {
        self.append(request).map(|(record, _)| record)
    }

    /// Prices a shift, appends its record and returns the full breakdown.
    ///
    /// On error nothing is appended.
    pub fn add_shift(&mut self, request: &ShiftRequest) -> PayrollResult<ShiftPay> {
        self.append(request).map(|(_, pay)| pay)
    }

    fn append(&mut self, request: &ShiftRequest) -> PayrollResult<(DailyRecord, ShiftPay)> {
        let pay = compute_pay_for_shift(request, &self.policy)?;
        let record = DailyRecord {
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            pay: pay.total,
        };
        self.records.push(record.clone());
        Ok((record, pay))
    }

    /// Sum of pay across all stored records.
    pub fn total_pay(&self) -> Decimal {
        self.records.iter().map(|r| r.pay).sum()
    }

    /// Stored records, in insertion order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no day has been added.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The policy this ledger prices under.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// One line per stored day, or a placeholder line when empty.
    pub fn report(&self) -> String {
        if self.records.is_empty() {
            return "No work days have been added.".to_string();
        }

        self.records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
