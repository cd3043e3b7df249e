//! Referential integrity between transactions and the cleaned customer set.

use std::collections::BTreeSet;

use tracing::debug;

use rollup_model::{Customer, Transaction};

/// Surviving transactions plus the orphan accounting.
#[derive(Debug, Clone)]
pub struct OrphanFilterResult {
    pub transactions: Vec<Transaction>,
    pub orphans_dropped: usize,
}

/// Orphan policy: a transaction is an orphan when its `customer_id` is not
/// in the cleaned customer key set.
fn is_orphan(transaction: &Transaction, customer_ids: &BTreeSet<i64>) -> bool {
    !customer_ids.contains(&transaction.customer_id)
}

/// Drop every orphaned transaction, counting the drops.
///
/// Runs after both entities are cleaned. Its output is the authoritative
/// transaction set; nothing downstream reintroduces removed transactions.
pub fn drop_orphans(transactions: Vec<Transaction>, customers: &[Customer]) -> OrphanFilterResult {
    let customer_ids: BTreeSet<i64> = customers
        .iter()
        .map(|customer| customer.customer_id)
        .collect();
    let input = transactions.len();
    let survivors: Vec<Transaction> = transactions
        .into_iter()
        .filter(|transaction| !is_orphan(transaction, &customer_ids))
        .collect();
    let orphans_dropped = input - survivors.len();
    debug!(input, orphans_dropped, "integrity filter applied");
    OrphanFilterResult {
        transactions: survivors,
        orphans_dropped,
    }
}
