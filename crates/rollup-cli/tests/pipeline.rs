//! End-to-end pipeline tests: CSV in, summary CSV out.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rollup_cli::pipeline::{load, transform};
use rollup_report::write_summary_csv;

const CUSTOMERS: &str = "\
id,name,state,signup_date
1,Ann,NY,2023-05-01
1,Ann,NY,2023-05-01
2,,CA,2023-06-01
3,Cid,,not-a-date
";

const TRANSACTIONS: &str = "\
transaction_id,customer_id,amount,transaction_date
10,1,10.555,2024-01-05
11,1,4.445,2024-01-25
12,3,3.00,2023-12-31
13,99,50.00,2024-01-01
14,1,,2024-02-01
15,1,2.00,garbled
";

fn fixture_dir(customers: &str, transactions: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let customers_path = dir.path().join("customers.csv");
    let transactions_path = dir.path().join("transactions.csv");
    fs::write(&customers_path, customers).expect("write customers");
    fs::write(&transactions_path, transactions).expect("write transactions");
    (dir, customers_path, transactions_path)
}

#[test]
fn full_run_counts_every_drop_and_writes_ordered_summary() {
    let (dir, customers_path, transactions_path) = fixture_dir(CUSTOMERS, TRANSACTIONS);
    let data = load(&customers_path, &transactions_path).expect("load");
    assert_eq!(data.customers.len(), 4);
    assert_eq!(data.transactions.len(), 6);

    let result = transform(data);
    // Customers: nameless #2 dropped, duplicate Ann dropped.
    assert_eq!(result.customer_counts.nulls_dropped, 1);
    assert_eq!(result.customer_counts.duplicates_dropped, 1);
    // Transactions: null amount and garbled date each count as a null drop.
    assert_eq!(result.transaction_counts.nulls_dropped, 2);
    assert_eq!(result.transaction_counts.duplicates_dropped, 0);
    // Customer 99 never existed.
    assert_eq!(result.orphans_dropped, 1);

    let output_path = dir.path().join("summary.csv");
    write_summary_csv(&output_path, &result.summaries).expect("write summary");
    let written = fs::read_to_string(&output_path).expect("read summary");
    assert_eq!(
        written,
        "customer_id,name,year_month,total_amount,transaction_count\n\
         1,Ann,2024-01,15.00,2\n\
         3,Cid,2023-12,3.00,1\n"
    );
}

#[test]
fn running_twice_is_byte_identical() {
    let (dir, customers_path, transactions_path) = fixture_dir(CUSTOMERS, TRANSACTIONS);
    let mut outputs = Vec::new();
    for run in 0..2 {
        let data = load(&customers_path, &transactions_path).expect("load");
        let result = transform(data);
        let output_path = dir.path().join(format!("summary_{run}.csv"));
        write_summary_csv(&output_path, &result.summaries).expect("write summary");
        outputs.push(fs::read(&output_path).expect("read summary"));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn orphaned_transaction_is_absent_from_all_output() {
    let (_dir, customers_path, transactions_path) = fixture_dir(
        "id,name,state,signup_date\n1,Ann,,\n",
        "transaction_id,customer_id,amount,transaction_date\n\
         10,99,5.00,2024-01-01\n\
         11,1,2.00,2024-01-02\n",
    );
    let data = load(&customers_path, &transactions_path).expect("load");
    let result = transform(data);
    assert_eq!(result.orphans_dropped, 1);
    assert_eq!(result.summaries.len(), 1);
    assert!(result.summaries.iter().all(|row| row.customer_id != 99));
}

#[test]
fn empty_transactions_produce_header_only_output() {
    let (dir, customers_path, transactions_path) = fixture_dir(
        "id,name,state,signup_date\n1,Ann,,\n",
        "transaction_id,customer_id,amount,transaction_date\n",
    );
    let data = load(&customers_path, &transactions_path).expect("load");
    let result = transform(data);
    assert!(result.summaries.is_empty());

    let output_path = dir.path().join("summary.csv");
    write_summary_csv(&output_path, &result.summaries).expect("write summary");
    let written = fs::read_to_string(&output_path).expect("read summary");
    assert_eq!(
        written,
        "customer_id,name,year_month,total_amount,transaction_count\n"
    );
}

#[test]
fn missing_input_aborts_before_any_stage() {
    let dir = TempDir::new().expect("temp dir");
    let customers_path = dir.path().join("customers.csv");
    fs::write(&customers_path, "id,name,state,signup_date\n1,Ann,,\n")
        .expect("write customers");
    let absent = dir.path().join("transactions.csv");
    assert!(load(&customers_path, &absent).is_err());
}
