//! Pay policy configuration.
//!
//! This module provides the policy types (base rates, the multiplier rule
//! table, the travel schedule) and a loader that reads them from YAML files.
//! A policy change is a data change: edit the YAML, not the calculation code.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! for rule in &loader.policy().multipliers.rules {
//!     println!("{} -> {}", rule.id, rule.multiplier);
//! }
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BaseRates, MultiplierRule, PayPolicy, RuleCondition, RuleTable, TravelSchedule,
};
