//! Configuration module
//!
//! The only configurable behavior is the text of the two lookup failures.
//! Values come from environment variables or from a key/value mapping.

use crate::error::{Result, RewardsError};
use serde::Deserialize;
use std::env;

/// Environment variable overriding [`Messages::customer_not_found`].
pub const CUSTOMER_NOT_FOUND_ENV: &str = "REWARDS_CUSTOMER_NOT_FOUND";

/// Environment variable overriding [`Messages::no_transactions_found`].
pub const NO_TRANSACTIONS_FOUND_ENV: &str = "REWARDS_NO_TRANSACTIONS_FOUND";

pub const DEFAULT_CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const DEFAULT_NO_TRANSACTIONS_FOUND: &str = "No transactions found";

/// Error messages used by the rewards service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Prefix for a missing customer; the customer id is appended.
    pub customer_not_found: String,

    /// Message for an empty date-filtered transaction set.
    pub no_transactions_found: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            customer_not_found: DEFAULT_CUSTOMER_NOT_FOUND.to_string(),
            no_transactions_found: DEFAULT_NO_TRANSACTIONS_FOUND.to_string(),
        }
    }
}

impl Messages {
    /// Load messages from environment variables, defaulting unset ones.
    ///
    /// A variable that is set but blank is rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds messages from any key lookup, using the environment variable
    /// names as keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Messages::default();

        let customer_not_found = read(&lookup, CUSTOMER_NOT_FOUND_ENV)?
            .unwrap_or(defaults.customer_not_found);
        let no_transactions_found = read(&lookup, NO_TRANSACTIONS_FOUND_ENV)?
            .unwrap_or(defaults.no_transactions_found);

        Ok(Messages {
            customer_not_found,
            no_transactions_found,
        })
    }
}

fn read<F>(lookup: &F, key: &'static str) -> Result<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(RewardsError::Config { key }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}
