//! Monthly aggregation: one bucket per (customer, name, month) triple.

use std::collections::BTreeMap;

use tracing::debug;

use rollup_model::{JoinedRecord, MonthlySummary};

#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    total: f64,
    count: usize,
}

/// Group joined records by (`customer_id`, `name`, `year_month`) and compute
/// each group's amount sum and record count.
///
/// Key equality is exact. Every input record lands in exactly one bucket.
/// Totals are raw sums here; rounding happens once in the formatting stage.
pub fn aggregate_monthly(joined: Vec<JoinedRecord>) -> Vec<MonthlySummary> {
    let mut buckets: BTreeMap<(i64, Option<String>, String), Bucket> = BTreeMap::new();
    let input = joined.len();
    for record in joined {
        let bucket = buckets
            .entry((record.customer_id, record.name, record.year_month))
            .or_default();
        bucket.total += record.amount;
        bucket.count += 1;
    }
    let summaries: Vec<MonthlySummary> = buckets
        .into_iter()
        .map(|((customer_id, name, year_month), bucket)| MonthlySummary {
            customer_id,
            name,
            year_month,
            total_amount: bucket.total,
            transaction_count: bucket.count,
        })
        .collect();
    debug!(
        input_records = input,
        bucket_count = summaries.len(),
        "aggregation complete"
    );
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(customer_id: i64, name: &str, year_month: &str, amount: f64) -> JoinedRecord {
        JoinedRecord {
            transaction_id: 0,
            customer_id,
            amount,
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            name: Some(name.to_string()),
            year_month: year_month.to_string(),
        }
    }

    #[test]
    fn sums_and_counts_per_customer_month() {
        let joined = vec![
            record(1, "Ann", "2024-01", 10.0),
            record(1, "Ann", "2024-01", 2.5),
            record(1, "Ann", "2024-02", 1.0),
            record(2, "Bob", "2024-01", 4.0),
        ];
        let summaries = aggregate_monthly(joined);
        assert_eq!(summaries.len(), 3);

        let ann_jan = &summaries[0];
        assert_eq!(ann_jan.customer_id, 1);
        assert_eq!(ann_jan.year_month, "2024-01");
        assert!((ann_jan.total_amount - 12.5).abs() < 1e-9);
        assert_eq!(ann_jan.transaction_count, 2);

        assert_eq!(summaries[1].year_month, "2024-02");
        assert_eq!(summaries[1].transaction_count, 1);
        assert_eq!(summaries[2].customer_id, 2);
    }

    #[test]
    fn buckets_are_exhaustive_over_the_input() {
        let joined = vec![
            record(1, "Ann", "2024-01", 1.0),
            record(1, "Ann", "2024-01", 1.0),
            record(3, "Cid", "2023-12", 1.0),
        ];
        let summaries = aggregate_monthly(joined);
        let counted: usize = summaries
            .iter()
            .map(|summary| summary.transaction_count)
            .sum();
        assert_eq!(counted, 3);
    }

    #[test]
    fn null_name_forms_its_own_bucket() {
        let mut orphan = record(9, "unused", "2024-03", 2.0);
        orphan.name = None;
        let summaries = aggregate_monthly(vec![orphan]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, None);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(aggregate_monthly(Vec::new()).is_empty());
    }
}
