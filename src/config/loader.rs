//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a pay policy
//! from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayPolicy, RatesConfig, RuleTable, TravelSchedule};

/// Loads and validates a pay policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml        # Hourly base rates
/// ├── multipliers.yaml  # Ordered multiplier rule table
/// └── travel.yaml       # Travel reimbursement schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Control room rate: {}", loader.policy().base_rates.control_room);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The policy fails validation (see [`ConfigLoader::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let multipliers = Self::load_yaml::<RuleTable>(&path.join("multipliers.yaml"))?;
        let travel = Self::load_yaml::<TravelSchedule>(&path.join("travel.yaml"))?;

        let policy = PayPolicy {
            base_rates: rates.base_rates,
            multipliers,
            travel,
        };
        Self::validate(&policy)?;

        debug!(
            path = %path.display(),
            rules = policy.multipliers.rules.len(),
            "Loaded pay policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy after validating it.
    pub fn from_policy(policy: PayPolicy) -> PayrollResult<Self> {
        Self::validate(&policy)?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks a policy for values no shift could be priced with.
    ///
    /// Rejects negative rates, charges or multipliers, hour bounds above 24,
    /// empty hour windows, and duplicate rule ids.
    pub fn validate(policy: &PayPolicy) -> PayrollResult<()> {
        let rates = &policy.base_rates;
        if rates.control_room < Decimal::ZERO || rates.standard < Decimal::ZERO {
            return Err(invalid("base rates must not be negative"));
        }

        let table = &policy.multipliers;
        if table.default_multiplier < Decimal::ZERO {
            return Err(invalid("default multiplier must not be negative"));
        }

        let mut seen = HashSet::new();
        for rule in &table.rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(invalid(format!("duplicate rule id '{}'", rule.id)));
            }
            if rule.multiplier < Decimal::ZERO {
                return Err(invalid(format!(
                    "rule '{}' has a negative multiplier",
                    rule.id
                )));
            }
            let bounds = [rule.when.from_hour, rule.when.before_hour];
            if bounds.iter().flatten().any(|h| *h > 24) {
                return Err(invalid(format!(
                    "rule '{}' has an hour bound above 24",
                    rule.id
                )));
            }
            if let (Some(from), Some(before)) = (rule.when.from_hour, rule.when.before_hour) {
                if from >= before {
                    return Err(invalid(format!(
                        "rule '{}' has an empty hour window {}..{}",
                        rule.id, from, before
                    )));
                }
            }
        }

        let travel = &policy.travel;
        let charges = [
            travel.default_charge,
            travel.friday_before_cutoff,
            travel.friday_after_cutoff,
            travel.saturday_night_charge,
        ];
        if charges.iter().any(|c| *c < Decimal::ZERO) {
            return Err(invalid("travel charges must not be negative"));
        }

        Ok(())
    }

    /// Returns the loaded pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the pay policy.
    pub fn into_policy(self) -> PayPolicy {
        self.policy
    }
}

fn invalid(message: impl Into<String>) -> PayrollError {
    PayrollError::InvalidConfig {
        message: message.into(),
    }
}
