//! Error types for the rewards service.

use thiserror::Error;

/// Result type alias for rewards operations
pub type Result<T> = std::result::Result<T, RewardsError>;

/// Errors that can occur while computing or serving rewards.
#[derive(Error, Debug)]
pub enum RewardsError {
    /// No customer matches the requested id.
    ///
    /// `message` is the configured text; the id is appended when displayed.
    #[error("{message} {customer_id}")]
    CustomerNotFound { customer_id: u64, message: String },

    /// The customer exists but has no transactions inside the requested range.
    #[error("{message}")]
    NoTransactionsFound { message: String },

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date argument not in `YYYY-MM-DD` form
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Customer id argument is not a non-negative integer
    #[error("Invalid customer id '{value}'")]
    InvalidCustomerId { value: String },

    /// A configuration variable is present but unusable
    #[error("Invalid configuration value for {key}")]
    Config { key: &'static str },

    /// Missing or unknown command line arguments
    #[error(
        "Usage: customer-rewards <customers.csv> <transactions.csv> \
         (transactions <customer-id> | rewards <customer-id> <start> <end>)"
    )]
    Usage,
}

impl RewardsError {
    /// Returns `true` for the two domain failures of the rewards lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RewardsError::CustomerNotFound { .. } | RewardsError::NoTransactionsFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_not_found_appends_id() {
        let err = RewardsError::CustomerNotFound {
            customer_id: 1,
            message: "Customer not found".to_string(),
        };
        assert_eq!(err.to_string(), "Customer not found 1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_no_transactions_message_is_verbatim() {
        let err = RewardsError::NoTransactionsFound {
            message: "Nothing here".to_string(),
        };
        assert_eq!(err.to_string(), "Nothing here");
        assert!(err.is_not_found());
        assert!(!RewardsError::Usage.is_not_found());
    }
}
