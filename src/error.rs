//! Error types for the shift payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing shifts or loading
//! a pay policy.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// # Example
///
/// ```
/// use shift_pay::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A shift could not be priced, e.g. because it has zero length.
    #[error("Invalid shift on {date} ({start_time}-{end_time}): {message}")]
    InvalidShift {
        /// The nominal date of the shift.
        date: NaiveDate,
        /// The wall-clock start time.
        start_time: NaiveTime,
        /// The wall-clock end time.
        end_time: NaiveTime,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable policy.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
