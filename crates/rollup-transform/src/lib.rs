//! The ledger rollup transform: every stage between load and write.
//!
//! Stages run strictly in order, each consuming the previous stage's output
//! by value and returning a new owned set:
//!
//! 1. **Clean**: drop rows with null required fields, then duplicate keys.
//! 2. **Integrity**: drop transactions referencing an absent customer.
//! 3. **Join**: attach customer names, derive the calendar month bucket.
//! 4. **Aggregate**: sum and count per (customer, name, month).
//! 5. **Format**: round totals, order rows.
//!
//! Every drop rule is a named policy so each is testable on its own.

pub mod aggregate;
pub mod clean;
pub mod dedupe;
pub mod format;
pub mod integrity;
pub mod join;

pub use aggregate::aggregate_monthly;
pub use clean::{CleanedCustomers, CleanedTransactions, clean_customers, clean_transactions};
pub use dedupe::dedupe_by_key;
pub use format::{finalize_summaries, round_to_cents};
pub use integrity::{OrphanFilterResult, drop_orphans};
pub use join::{join_customers, year_month};
