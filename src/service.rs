//! Rewards aggregation.
//!
//! Turns a customer's transactions into per-transaction points, a total and
//! a per-month breakdown. The service holds no mutable state of its own;
//! every read goes through the store it was built with.

use crate::config::Messages;
use crate::customer::{CustomerResponse, NewCustomer};
use crate::error::{Result, RewardsError};
use crate::reward::{month_key, RewardResult, RewardSummary, TimeFrame};
use crate::store::{CustomerSink, CustomerSource, TransactionSource};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// The rewards service.
///
/// # Empty results
///
/// [`list_transactions`](Self::list_transactions) returns an empty list for
/// a customer without transactions, while
/// [`get_rewards`](Self::get_rewards) fails with
/// [`RewardsError::NoTransactionsFound`] when nothing falls in the range.
pub struct RewardsService<S> {
    store: S,
    messages: Messages,
}

impl<S> RewardsService<S>
where
    S: CustomerSource + TransactionSource,
{
    /// Creates a service reading from `store` and reporting failures with
    /// `messages`.
    pub fn new(store: S, messages: Messages) -> Self {
        RewardsService { store, messages }
    }

    /// Lists every transaction of a customer with its points, in store order.
    ///
    /// An unknown customer and a customer without purchases both yield an
    /// empty list.
    pub fn list_transactions(&self, customer_id: u64) -> Vec<RewardResult> {
        let results: Vec<RewardResult> = self
            .store
            .find_transactions_by_customer_id(customer_id)
            .iter()
            .map(RewardResult::from)
            .collect();

        debug!(
            "Listed {} transactions for customer {}",
            results.len(),
            customer_id
        );
        results
    }

    /// Computes the rewards of a customer for purchases dated within
    /// `[start, end]`.
    ///
    /// # Errors
    ///
    /// - [`RewardsError::CustomerNotFound`] if no customer has this id
    /// - [`RewardsError::NoTransactionsFound`] if the customer has no
    ///   transactions in the range
    pub fn get_rewards(
        &self,
        customer_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RewardSummary> {
        let customer = self.store.find_customer_by_id(customer_id).ok_or_else(|| {
            RewardsError::CustomerNotFound {
                customer_id,
                message: self.messages.customer_not_found.clone(),
            }
        })?;

        let transactions = self
            .store
            .find_transactions_by_customer_id_and_date_range(customer_id, start, end);

        if transactions.is_empty() {
            debug!(
                "No transactions for customer {} between {} and {}",
                customer_id, start, end
            );
            return Err(RewardsError::NoTransactionsFound {
                message: self.messages.no_transactions_found.clone(),
            });
        }

        let mut results = Vec::with_capacity(transactions.len());
        let mut monthly_points: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_points = 0u64;

        for tx in &transactions {
            let result = RewardResult::from(tx);
            let bucket = monthly_points.entry(month_key(tx.date)).or_insert(0);
            *bucket = bucket.saturating_add(result.points);
            total_points = total_points.saturating_add(result.points);
            results.push(result);
        }

        debug!(
            "Customer {}: {} points from {} transactions between {} and {}",
            customer_id,
            total_points,
            results.len(),
            start,
            end
        );

        Ok(RewardSummary {
            customer_id: customer.id,
            customer_name: customer.name,
            transactions: results,
            total_points,
            monthly_points,
            time_frame: TimeFrame::new(start, end),
        })
    }
}

impl<S> RewardsService<S>
where
    S: CustomerSource + TransactionSource + CustomerSink,
{
    /// Creates a customer with its initial purchases and echoes it back with
    /// the points each purchase earns.
    pub fn create_customer(&mut self, new_customer: NewCustomer) -> CustomerResponse {
        let (customer, transactions) = self.store.insert_customer(new_customer);
        CustomerResponse::new(customer, &transactions)
    }
}
