//! Per-entity cleaning: required-field completeness, then duplicate keys.
//!
//! The order is fixed. Null-removal runs first because a record with a null
//! natural key must already be gone before keys are compared.

use tracing::debug;

use rollup_model::{CleanCounts, Customer, RawCustomer, RawTransaction, Transaction};

use crate::dedupe::dedupe_by_key;

/// Cleaned customers plus the drop accounting for the pass.
#[derive(Debug, Clone)]
pub struct CleanedCustomers {
    pub customers: Vec<Customer>,
    pub counts: CleanCounts,
}

/// Cleaned transactions plus the drop accounting for the pass.
#[derive(Debug, Clone)]
pub struct CleanedTransactions {
    pub transactions: Vec<Transaction>,
    pub counts: CleanCounts,
}

/// Clean the customer set: completeness on {`customer_id`, `name`}, then
/// first-wins dedupe on `customer_id`.
pub fn clean_customers(raw: Vec<RawCustomer>) -> CleanedCustomers {
    let input = raw.len();
    let complete: Vec<Customer> = raw
        .into_iter()
        .filter_map(RawCustomer::into_complete)
        .collect();
    let nulls_dropped = input - complete.len();
    let (customers, duplicates_dropped) =
        dedupe_by_key(complete, |customer| customer.customer_id);
    let counts = CleanCounts {
        input,
        nulls_dropped,
        duplicates_dropped,
    };
    debug!(
        input,
        nulls_dropped, duplicates_dropped, "customers cleaned"
    );
    CleanedCustomers { customers, counts }
}

/// Clean the transaction set: completeness on all four fields, then
/// first-wins dedupe on `transaction_id`.
pub fn clean_transactions(raw: Vec<RawTransaction>) -> CleanedTransactions {
    let input = raw.len();
    let complete: Vec<Transaction> = raw
        .into_iter()
        .filter_map(RawTransaction::into_complete)
        .collect();
    let nulls_dropped = input - complete.len();
    let (transactions, duplicates_dropped) =
        dedupe_by_key(complete, |transaction| transaction.transaction_id);
    let counts = CleanCounts {
        input,
        nulls_dropped,
        duplicates_dropped,
    };
    debug!(
        input,
        nulls_dropped, duplicates_dropped, "transactions cleaned"
    );
    CleanedTransactions {
        transactions,
        counts,
    }
}
