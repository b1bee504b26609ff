//! Application state for the shift payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayPolicy};

/// Shared application state.
///
/// Holds the pay policy every request is priced under.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay policy.
    policy: Arc<PayPolicy>,
}

impl AppState {
    /// Creates a new application state with the given pay policy.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }
}

impl From<ConfigLoader> for AppState {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_policy())
    }
}
