//! Calculation logic for the shift payroll engine.
//!
//! This module contains the shift segmenter, the multiplier resolver, the
//! per-shift pay calculation with its accumulating ledger, and the travel
//! reimbursement rule.

mod ledger;
mod multiplier;
mod pay;
mod segmenter;
mod travel;

pub use ledger::Ledger;
pub use multiplier::{MultiplierResolution, resolve_multiplier};
pub use pay::{compute_pay, compute_pay_for_shift};
pub use segmenter::{ShiftSegments, TimeSegment, segment_shift};
pub use travel::{TravelBand, TravelCharge, calculate_travel_charge, compute_travel_charge};
