//! Purchase transaction models for CSV parsing and internal representation.

use crate::amount::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar date format used on the wire and in CSV files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw transaction record as read from CSV.
///
/// Columns: `id,customer_id,amount,date,product`. Amount and date are kept
/// as strings so a malformed row can be reported and skipped instead of
/// aborting the whole load.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    /// Transaction ID (unique per store)
    pub id: u64,

    /// Owning customer ID
    pub customer_id: u64,

    /// Purchase amount, e.g. `120.00`
    pub amount: String,

    /// Purchase date, `YYYY-MM-DD`
    pub date: String,

    /// Free-text product label (may be empty)
    #[serde(default)]
    pub product: Option<String>,
}

impl TransactionRecord {
    /// Parses the raw CSV record into a typed transaction.
    ///
    /// Returns `None` if the amount or date cannot be parsed.
    pub fn parse(&self) -> Option<Transaction> {
        let amount = Amount::from_str(self.amount.trim()).ok()?;
        let date = parse_date(&self.date)?;

        Some(Transaction {
            id: self.id,
            customer_id: self.customer_id,
            amount,
            date,
            product: self
                .product
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Parses a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// A stored purchase transaction.
///
/// Refers to its customer by id only; looking the customer up is the
/// store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: u64,

    /// Owning customer
    pub customer_id: u64,

    /// Purchase amount
    pub amount: Amount,

    /// Purchase date (no time component)
    pub date: NaiveDate,

    /// Product label
    pub product: String,
}

impl Transaction {
    /// Returns `true` if the transaction date lies within `[start, end]`.
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

/// A purchase submitted as part of a new customer, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Amount,
    pub date: NaiveDate,
    #[serde(default)]
    pub product: String,
}

impl NewTransaction {
    /// Attaches store-assigned ids.
    pub fn into_transaction(self, id: u64, customer_id: u64) -> Transaction {
        Transaction {
            id,
            customer_id,
            amount: self.amount,
            date: self.date,
            product: self.product,
        }
    }
}
