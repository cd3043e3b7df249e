//! The rollup pipeline with explicit stages.
//!
//! Stages run in fixed order, each returning typed results the next stage
//! consumes by value:
//!
//! 1. **Load**: read both CSV sources into raw typed records
//! 2. **Clean**: drop null-required-field rows, then duplicate keys
//! 3. **Integrity**: drop transactions referencing absent customers
//! 4. **Join**: attach names, derive month buckets
//! 5. **Aggregate**: sum and count per (customer, month)
//! 6. **Format**: round totals, order rows

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info_span};

use rollup_model::{CleanCounts, MonthlySummary, RawCustomer, RawTransaction};
use rollup_ingest::{load_customers, load_transactions};
use rollup_transform::{
    aggregate_monthly, clean_customers, clean_transactions, drop_orphans, finalize_summaries,
    join_customers,
};

/// Result of the load stage: both sources, in file order, nothing dropped.
#[derive(Debug)]
pub struct LoadedData {
    pub customers: Vec<RawCustomer>,
    pub transactions: Vec<RawTransaction>,
}

/// Result of the full transform: the ordered summary set plus the drop
/// accounting from every stage.
#[derive(Debug)]
pub struct TransformResult {
    pub summaries: Vec<MonthlySummary>,
    pub customer_counts: CleanCounts,
    pub transaction_counts: CleanCounts,
    pub orphans_dropped: usize,
}

/// Read both input sources.
///
/// An unreadable file or a schema-violating header aborts here, before any
/// transform stage runs.
pub fn load(customers_path: &Path, transactions_path: &Path) -> Result<LoadedData> {
    let span = info_span!(
        "load",
        customers = %customers_path.display(),
        transactions = %transactions_path.display()
    );
    let _guard = span.enter();
    let start = Instant::now();
    let customers = load_customers(customers_path)?;
    let transactions = load_transactions(transactions_path)?;
    debug!(
        customer_rows = customers.len(),
        transaction_rows = transactions.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(LoadedData {
        customers,
        transactions,
    })
}

/// Run every transform stage over the loaded data.
///
/// Data-quality conditions are dropped and counted, never raised; this
/// function cannot fail.
pub fn transform(data: LoadedData) -> TransformResult {
    let start = Instant::now();

    let cleaned_customers = info_span!("clean", entity = "customers")
        .in_scope(|| clean_customers(data.customers));
    let cleaned_transactions = info_span!("clean", entity = "transactions")
        .in_scope(|| clean_transactions(data.transactions));

    let filtered = info_span!("integrity").in_scope(|| {
        drop_orphans(
            cleaned_transactions.transactions,
            &cleaned_customers.customers,
        )
    });

    let joined = info_span!("join")
        .in_scope(|| join_customers(filtered.transactions, &cleaned_customers.customers));

    let summaries = info_span!("aggregate")
        .in_scope(|| finalize_summaries(aggregate_monthly(joined)));

    debug!(
        summary_rows = summaries.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    TransformResult {
        summaries,
        customer_counts: cleaned_customers.counts,
        transaction_counts: cleaned_transactions.counts,
        orphans_dropped: filtered.orphans_dropped,
    }
}
