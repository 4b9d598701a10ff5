//! Customer models.

use crate::reward::RewardResult;
use crate::transaction::{NewTransaction, Transaction};
use serde::{Deserialize, Serialize};

/// Raw customer record as read from CSV (`id,name,phone`).
#[derive(Debug, Deserialize)]
pub struct CustomerRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Customer {
            id: record.id,
            name: record.name.trim().to_string(),
            phone: record
                .phone
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// A customer as known to the store.
///
/// Transactions are not held here; they reference the customer by id and
/// are fetched through [`crate::store::TransactionSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub phone: String,
}

/// A customer to be created together with its initial purchases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub transactions: Vec<NewTransaction>,
}

/// A freshly created customer echoed back with its purchases and points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponse {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub transactions: Vec<RewardResult>,
}

impl CustomerResponse {
    pub fn new(customer: Customer, transactions: &[Transaction]) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            transactions: transactions.iter().map(RewardResult::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_customer_from_record_trims_fields() {
        let customer = Customer::from(CustomerRecord {
            id: 1,
            name: "  John Doe ".to_string(),
            phone: Some(" 1234567890".to_string()),
        });
        assert_eq!(customer.name, "John Doe");
        assert_eq!(customer.phone, "1234567890");
    }

    #[test]
    fn test_customer_from_record_without_phone() {
        let customer = Customer::from(CustomerRecord {
            id: 2,
            name: "Jane".to_string(),
            phone: None,
        });
        assert_eq!(customer.phone, "");
    }

    #[test]
    fn test_new_customer_from_json() {
        let json = r#"{
            "name": "John Doe",
            "phone": "1234567890",
            "transactions": [
                {"amount": "40.0", "date": "2025-08-01", "product": "Product A"},
                {"amount": "120.0", "date": "2025-08-10"}
            ]
        }"#;
        let new_customer: NewCustomer = serde_json::from_str(json).unwrap();
        assert_eq!(new_customer.name, "John Doe");
        assert_eq!(new_customer.transactions.len(), 2);
        assert_eq!(
            new_customer.transactions[1].date,
            NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
        );
        assert_eq!(new_customer.transactions[1].product, "");
    }

    #[test]
    fn test_response_computes_points() {
        let customer = Customer {
            id: 1,
            name: "John Doe".to_string(),
            phone: "1234567890".to_string(),
        };
        let tx = Transaction {
            id: 1,
            customer_id: 1,
            amount: Amount::from(120),
            date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
            product: "Product B".to_string(),
        };
        let response = CustomerResponse::new(customer, &[tx]);
        assert_eq!(response.id, 1);
        assert_eq!(response.transactions[0].points, 90);
    }
}
