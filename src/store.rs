//! Customer and transaction sources.
//!
//! The rewards service only reads through [`CustomerSource`] and
//! [`TransactionSource`]; [`InMemoryStore`] is the implementation used by
//! the CLI and the tests, loaded from CSV in streaming fashion.

use crate::customer::{Customer, CustomerRecord, NewCustomer};
use crate::error::Result;
use crate::transaction::{Transaction, TransactionRecord};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::io::Read;

/// Lookup of customers by id.
pub trait CustomerSource {
    fn find_customer_by_id(&self, id: u64) -> Option<Customer>;
}

/// Lookup of a customer's transactions, in source order.
pub trait TransactionSource {
    fn find_transactions_by_customer_id(&self, customer_id: u64) -> Vec<Transaction>;

    /// Transactions dated within `[start, end]`, both ends inclusive.
    fn find_transactions_by_customer_id_and_date_range(
        &self,
        customer_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Transaction>;
}

/// Write path for new customers and their initial purchases.
pub trait CustomerSink {
    /// Stores the customer, assigning fresh ids, and returns what was stored.
    fn insert_customer(&mut self, new_customer: NewCustomer) -> (Customer, Vec<Transaction>);
}

/// Customers and transactions held in memory.
///
/// Transactions keep their insertion order, which is the order every query
/// returns them in.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: HashMap<u64, Customer>,
    transactions: Vec<Transaction>,
    transaction_ids: HashSet<u64>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads customers from a CSV reader with header `id,name,phone`.
    ///
    /// Invalid rows and duplicate ids are logged at warn level and skipped.
    /// Returns the number of customers added.
    pub fn load_customers_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut added = 0;
        for (row_idx, result) in csv_reader.deserialize::<CustomerRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if self.customers.contains_key(&record.id) {
                        warn!("Row {}: Duplicate customer ID {}, ignoring", row_num, record.id);
                        continue;
                    }
                    let customer = Customer::from(record);
                    debug!("Row {}: Loaded customer {}", row_num, customer.id);
                    self.customers.insert(customer.id, customer);
                    added += 1;
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(added)
    }

    /// Loads transactions from a CSV reader with header
    /// `id,customer_id,amount,date,product`.
    ///
    /// Invalid rows and duplicate ids are logged at warn level and skipped.
    /// Returns the number of transactions added.
    pub fn load_transactions_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut added = 0;
        for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let row_num = row_idx + 2;

            match result {
                Ok(record) => match record.parse() {
                    Some(tx) => {
                        if self.insert_transaction(tx) {
                            added += 1;
                        } else {
                            warn!(
                                "Row {}: Duplicate transaction ID {}, ignoring",
                                row_num, record.id
                            );
                        }
                    }
                    None => {
                        warn!("Row {}: Failed to parse transaction record", row_num);
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(added)
    }

    /// Adds a customer, replacing any existing customer with the same id.
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id, customer);
    }

    /// Appends a transaction. Returns `false` if its id is already taken.
    ///
    /// The customer id is not checked against known customers.
    pub fn insert_transaction(&mut self, tx: Transaction) -> bool {
        if !self.transaction_ids.insert(tx.id) {
            return false;
        }
        self.transactions.push(tx);
        true
    }

    /// Number of customers held.
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Number of transactions held.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    fn next_customer_id(&self) -> u64 {
        self.customers.keys().max().map_or(1, |id| id + 1)
    }

    fn next_transaction_id(&self) -> u64 {
        self.transaction_ids.iter().max().map_or(1, |id| id + 1)
    }
}

impl CustomerSource for InMemoryStore {
    fn find_customer_by_id(&self, id: u64) -> Option<Customer> {
        self.customers.get(&id).cloned()
    }
}

impl TransactionSource for InMemoryStore {
    fn find_transactions_by_customer_id(&self, customer_id: u64) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.customer_id == customer_id)
            .cloned()
            .collect()
    }

    fn find_transactions_by_customer_id_and_date_range(
        &self,
        customer_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.customer_id == customer_id && tx.is_within(start, end))
            .cloned()
            .collect()
    }
}

impl CustomerSink for InMemoryStore {
    fn insert_customer(&mut self, new_customer: NewCustomer) -> (Customer, Vec<Transaction>) {
        let customer = Customer {
            id: self.next_customer_id(),
            name: new_customer.name,
            phone: new_customer.phone,
        };
        self.insert(customer.clone());

        let mut stored = Vec::with_capacity(new_customer.transactions.len());
        for new_tx in new_customer.transactions {
            let tx = new_tx.into_transaction(self.next_transaction_id(), customer.id);
            self.insert_transaction(tx.clone());
            stored.push(tx);
        }

        debug!(
            "Created customer {} with {} transactions",
            customer.id,
            stored.len()
        );
        (customer, stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::transaction::NewTransaction;
    use std::io::Cursor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn load(customers: &str, transactions: &str) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.load_customers_csv(Cursor::new(customers)).unwrap();
        store.load_transactions_csv(Cursor::new(transactions)).unwrap();
        store
    }

    #[test]
    fn test_load_customers() {
        let store = load(
            "id,name,phone\n1,John Doe,1234567890\n2,Jane Roe,\n",
            "id,customer_id,amount,date,product\n",
        );
        assert_eq!(store.customer_count(), 2);
        assert_eq!(store.find_customer_by_id(1).unwrap().name, "John Doe");
        assert_eq!(store.find_customer_by_id(2).unwrap().phone, "");
        assert!(store.find_customer_by_id(3).is_none());
    }

    #[test]
    fn test_duplicate_customer_first_wins() {
        let store = load(
            "id,name,phone\n1,First,\n1,Second,\n",
            "id,customer_id,amount,date,product\n",
        );
        assert_eq!(store.customer_count(), 1);
        assert_eq!(store.find_customer_by_id(1).unwrap().name, "First");
    }

    #[test]
    fn test_load_transactions_skips_bad_rows() {
        let store = load(
            "id,name,phone\n1,John,\n",
            "id,customer_id,amount,date,product
1,1,40.0,2025-08-01,Product A
2,1,oops,2025-08-02,Bad amount
3,1,10.0,not-a-date,Bad date
x,1,10.0,2025-08-03,Bad id
1,1,99.0,2025-08-04,Duplicate id
4,1,120.0,2025-08-10,Product B",
        );
        assert_eq!(store.transaction_count(), 2);
        let txs = store.find_transactions_by_customer_id(1);
        assert_eq!(txs[0].product, "Product A");
        assert_eq!(txs[1].product, "Product B");
    }

    #[test]
    fn test_transactions_keep_insertion_order() {
        let store = load(
            "id,name,phone\n1,John,\n2,Jane,\n",
            "id,customer_id,amount,date,product
10,1,10.0,2025-09-01,c
11,2,20.0,2025-08-01,other
12,1,10.0,2025-07-01,a
13,1,10.0,2025-08-01,b",
        );
        let ids: Vec<u64> = store
            .find_transactions_by_customer_id(1)
            .iter()
            .map(|tx| tx.id)
            .collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let store = load(
            "id,name,phone\n1,John,\n",
            "id,customer_id,amount,date,product
1,1,10.0,2025-07-31,before
2,1,10.0,2025-08-01,first day
3,1,10.0,2025-08-31,last day
4,1,10.0,2025-09-01,after",
        );
        let txs = store.find_transactions_by_customer_id_and_date_range(
            1,
            date(2025, 8, 1),
            date(2025, 8, 31),
        );
        let products: Vec<&str> = txs.iter().map(|tx| tx.product.as_str()).collect();
        assert_eq!(products, vec!["first day", "last day"]);
    }

    #[test]
    fn test_transactions_for_unknown_customer_are_kept() {
        let store = load(
            "id,name,phone\n",
            "id,customer_id,amount,date,product\n1,42,10.0,2025-08-01,orphan",
        );
        assert!(store.find_customer_by_id(42).is_none());
        assert_eq!(store.find_transactions_by_customer_id(42).len(), 1);
    }

    #[test]
    fn test_insert_customer_assigns_ids() {
        let mut store = load(
            "id,name,phone\n5,Existing,\n",
            "id,customer_id,amount,date,product\n8,5,10.0,2025-08-01,x",
        );
        let (customer, txs) = store.insert_customer(NewCustomer {
            name: "John Doe".to_string(),
            phone: "1234567890".to_string(),
            transactions: vec![
                NewTransaction {
                    amount: Amount::from(40),
                    date: date(2025, 8, 1),
                    product: "Product A".to_string(),
                },
                NewTransaction {
                    amount: Amount::from(120),
                    date: date(2025, 8, 10),
                    product: "Product B".to_string(),
                },
            ],
        });

        assert_eq!(customer.id, 6);
        assert_eq!(txs.iter().map(|tx| tx.id).collect::<Vec<_>>(), vec![9, 10]);
        assert!(txs.iter().all(|tx| tx.customer_id == 6));
        assert_eq!(store.find_customer_by_id(6), Some(customer));
        assert_eq!(store.find_transactions_by_customer_id(6), txs);
    }

    #[test]
    fn test_insert_customer_into_empty_store() {
        let mut store = InMemoryStore::new();
        let (customer, txs) = store.insert_customer(NewCustomer {
            name: "Solo".to_string(),
            phone: String::new(),
            transactions: vec![],
        });
        assert_eq!(customer.id, 1);
        assert!(txs.is_empty());
    }
}
