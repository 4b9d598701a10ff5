//! # Customer Rewards
//!
//! Loyalty points for customer purchases, aggregated per calendar month over
//! a requested date range.
//!
//! ## Points
//!
//! - Up to and including $50: nothing
//! - $50 to $100: 1 point per dollar over $50
//! - Over $100: 50 points plus 2 points per dollar over $100
//!
//! ## Example
//!
//! ```
//! use customer_rewards::{InMemoryStore, Messages, RewardsService};
//! use chrono::NaiveDate;
//! use std::io::Cursor;
//!
//! let mut store = InMemoryStore::new();
//! store
//!     .load_customers_csv(Cursor::new("id,name,phone\n1,John Doe,1234567890\n"))
//!     .unwrap();
//! store
//!     .load_transactions_csv(Cursor::new(
//!         "id,customer_id,amount,date,product\n1,1,120.0,2025-08-10,Product B\n",
//!     ))
//!     .unwrap();
//!
//! let service = RewardsService::new(store, Messages::default());
//! let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
//! let summary = service.get_rewards(1, start, end).unwrap();
//! assert_eq!(summary.total_points, 90);
//! ```

pub mod amount;
pub mod config;
pub mod customer;
pub mod error;
pub mod points;
pub mod reward;
pub mod service;
pub mod store;
pub mod transaction;

pub use amount::Amount;
pub use config::Messages;
pub use customer::{Customer, CustomerRecord, CustomerResponse, NewCustomer};
pub use error::{Result, RewardsError};
pub use points::reward_points;
pub use reward::{month_key, RewardResult, RewardSummary, TimeFrame};
pub use service::RewardsService;
pub use store::{CustomerSink, CustomerSource, InMemoryStore, TransactionSource};
pub use transaction::{parse_date, NewTransaction, Transaction, TransactionRecord};
