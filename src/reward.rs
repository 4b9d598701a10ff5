//! Reward results returned to callers.
//!
//! These are derived on every read and never stored.
//!
//! # Invariant
//!
//! For a [`RewardSummary`]: `total_points` equals the sum of the
//! per-transaction points and the sum of the monthly buckets.

use crate::amount::Amount;
use crate::points::reward_points;
use crate::transaction::{Transaction, DATE_FORMAT};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Points earned by a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardResult {
    pub amount: Amount,
    pub date: NaiveDate,
    pub product: String,
    pub points: u64,
}

impl From<&Transaction> for RewardResult {
    fn from(tx: &Transaction) -> Self {
        RewardResult {
            amount: tx.amount,
            date: tx.date,
            product: tx.product.clone(),
            points: reward_points(tx.amount),
        }
    }
}

/// The requested date window, echoed back as ISO calendar strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrame {
    pub start_date: String,
    pub end_date: String,
}

impl TimeFrame {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        TimeFrame {
            start_date: start.format(DATE_FORMAT).to_string(),
            end_date: end.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Rewards for one customer over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    pub customer_id: u64,
    pub customer_name: String,
    pub transactions: Vec<RewardResult>,
    pub total_points: u64,
    /// Points per `YYYY-MM` month key.
    pub monthly_points: BTreeMap<String, u64>,
    pub time_frame: TimeFrame,
}

/// Returns the `YYYY-MM` bucket key for a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
