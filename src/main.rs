//! Customer Rewards CLI
//!
//! Loads customers and transactions from CSV files and prints reward
//! information as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- customers.csv transactions.csv transactions 1
//! cargo run -- customers.csv transactions.csv rewards 1 2025-08-01 2025-08-31
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//! - `REWARDS_CUSTOMER_NOT_FOUND`: Customer-not-found message prefix
//! - `REWARDS_NO_TRANSACTIONS_FOUND`: Message for an empty date range
//!
//! # Exit Status
//!
//! `0` on success, `2` when the customer or its transactions are not found,
//! `1` for any other error.

use chrono::NaiveDate;
use customer_rewards::{parse_date, InMemoryStore, Messages, Result, RewardsError, RewardsService};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(if e.is_not_found() { 2 } else { 1 });
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        return Err(RewardsError::Usage);
    }

    let messages = Messages::from_env()?;

    let mut store = InMemoryStore::new();
    let customers = store.load_customers_csv(BufReader::new(File::open(&args[1])?))?;
    let transactions = store.load_transactions_csv(BufReader::new(File::open(&args[2])?))?;
    info!(
        "Loaded {} customers and {} transactions",
        customers, transactions
    );

    let service = RewardsService::new(store, messages);
    let customer_id = parse_customer_id(&args[4])?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match (args[3].as_str(), &args[5..]) {
        ("transactions", []) => {
            let results = service.list_transactions(customer_id);
            serde_json::to_writer_pretty(&mut handle, &results)?;
        }
        ("rewards", [start, end]) => {
            let summary =
                service.get_rewards(customer_id, parse_date_arg(start)?, parse_date_arg(end)?)?;
            serde_json::to_writer_pretty(&mut handle, &summary)?;
        }
        _ => return Err(RewardsError::Usage),
    }

    writeln!(handle)?;
    handle.flush()?;
    Ok(())
}

fn parse_customer_id(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| RewardsError::InvalidCustomerId {
            value: value.to_string(),
        })
}

fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| RewardsError::InvalidDate {
        value: value.to_string(),
    })
}
