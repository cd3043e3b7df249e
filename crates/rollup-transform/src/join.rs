//! Left join of transactions onto customers, plus month bucketing.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use rollup_model::{Customer, JoinedRecord, Transaction};

/// Calendar month bucket for a date: `YYYY-MM`, zero-padded.
pub fn year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Attach the customer's display name to each transaction and derive its
/// month bucket.
///
/// Left-outer semantics: every transaction produces exactly one record, and
/// a missing customer yields `name: None` rather than a failure. The
/// integrity filter rules the miss out in the normal pipeline, but a
/// relaxed filter must degrade, not crash.
pub fn join_customers(transactions: Vec<Transaction>, customers: &[Customer]) -> Vec<JoinedRecord> {
    let by_id: BTreeMap<i64, &Customer> = customers
        .iter()
        .map(|customer| (customer.customer_id, customer))
        .collect();
    let joined: Vec<JoinedRecord> = transactions
        .into_iter()
        .map(|transaction| {
            let name = by_id
                .get(&transaction.customer_id)
                .map(|customer| customer.name.clone());
            let year_month = year_month(transaction.transaction_date);
            JoinedRecord {
                transaction_id: transaction.transaction_id,
                customer_id: transaction.customer_id,
                amount: transaction.amount,
                transaction_date: transaction.transaction_date,
                name,
                year_month,
            }
        })
        .collect();
    debug!(record_count = joined.len(), "join complete");
    joined
}
