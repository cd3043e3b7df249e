//! Typed records for each pipeline stage.
//!
//! Raw records come straight off the loader with every source-nullable field
//! wrapped in `Option`. Cleaned records encode the post-clean invariants in
//! the type system: a [`Customer`] cannot exist without an id and a name, and
//! a [`Transaction`] cannot exist with any of its four fields missing.

use chrono::NaiveDate;

/// A customer row as loaded, before any cleaning.
///
/// `customer_id` originates from the source column `id`; the loader renames
/// it on decode.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCustomer {
    pub customer_id: Option<i64>,
    pub name: Option<String>,
    pub state: Option<String>,
    /// Unparseable source values are coerced to `None` on load.
    pub signup_date: Option<NaiveDate>,
}

impl RawCustomer {
    /// Required-field completeness policy for customers: {`customer_id`,
    /// `name`}.
    ///
    /// Returns `None` when any required field is missing, which is exactly
    /// the cleaner's drop condition for this record.
    pub fn into_complete(self) -> Option<Customer> {
        Some(Customer {
            customer_id: self.customer_id?,
            name: self.name?,
            state: self.state,
            signup_date: self.signup_date,
        })
    }
}

/// A customer that passed required-field cleaning.
///
/// Uniqueness of `customer_id` across the cleaned set is enforced by the
/// duplicate-key policy, not by this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub state: Option<String>,
    /// Carried through for completeness; nothing downstream reads it.
    pub signup_date: Option<NaiveDate>,
}

/// A transaction row as loaded, before any cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransaction {
    pub transaction_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub amount: Option<f64>,
    /// Unparseable source values are coerced to `None` on load.
    pub transaction_date: Option<NaiveDate>,
}

impl RawTransaction {
    /// Required-field completeness policy for transactions: all four fields.
    pub fn into_complete(self) -> Option<Transaction> {
        Some(Transaction {
            transaction_id: self.transaction_id?,
            customer_id: self.customer_id?,
            amount: self.amount?,
            transaction_date: self.transaction_date?,
        })
    }
}

/// A transaction that passed required-field cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub transaction_date: NaiveDate,
}

/// A transaction with its customer's display name attached and the calendar
/// month bucket derived.
///
/// `name` is `None` only when no matching customer exists. The integrity
/// filter rules that out in the normal pipeline, but the join keeps
/// left-outer semantics so a relaxed filter degrades to an empty name rather
/// than a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub transaction_id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub transaction_date: NaiveDate,
    pub name: Option<String>,
    /// Calendar month bucket, `YYYY-MM`, zero-padded.
    pub year_month: String,
}

/// One output row: totals for one (customer, name, month) bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub customer_id: i64,
    pub name: Option<String>,
    pub year_month: String,
    /// Sum of the bucket's amounts; rounded to two decimals by the
    /// formatting stage, never per input row.
    pub total_amount: f64,
    pub transaction_count: usize,
}
