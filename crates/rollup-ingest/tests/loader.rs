use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use rollup_ingest::{load_customers, load_transactions, read_csv_table};

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn reads_table_preserving_row_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(&dir, "t.csv", "A,B\n1,x\n2,y\n3,z\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["1", "x"]);
    assert_eq!(table.rows[2], vec!["3", "z"]);
}

#[test]
fn skips_blank_lines_and_pads_short_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(&dir, "t.csv", "A,B,C\n1,x\n\n,,\n2,y,z,extra\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "x", ""]);
    assert_eq!(table.rows[1], vec!["2", "y", "z"]);
}

#[test]
fn loads_customers_with_case_insensitive_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(
        &dir,
        "customers.csv",
        "ID,Name,State,Signup_Date\n1,Ann,NY,2023-05-01\n2,Bob,,\n",
    );
    let customers = load_customers(&path).expect("load customers");
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer_id, Some(1));
    assert_eq!(customers[0].name.as_deref(), Some("Ann"));
    assert_eq!(customers[0].state.as_deref(), Some("NY"));
    assert_eq!(customers[0].signup_date, Some(date(2023, 5, 1)));
    assert_eq!(customers[1].state, None);
    assert_eq!(customers[1].signup_date, None);
}

#[test]
fn undecodable_values_load_as_null() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(
        &dir,
        "transactions.csv",
        "transaction_id,customer_id,amount,transaction_date\n\
         10,1,12.50,2024-01-15\n\
         oops,1,abc,not-a-date\n",
    );
    let transactions = load_transactions(&path).expect("load transactions");
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].transaction_id, Some(10));
    assert_eq!(transactions[0].amount, Some(12.50));
    assert_eq!(transactions[0].transaction_date, Some(date(2024, 1, 15)));
    assert_eq!(transactions[1].transaction_id, None);
    assert_eq!(transactions[1].amount, None);
    assert_eq!(transactions[1].transaction_date, None);
}

#[test]
fn missing_declared_column_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(&dir, "customers.csv", "id,state\n1,NY\n");
    let error = load_customers(&path).expect_err("missing name column");
    let message = format!("{error}");
    assert!(message.contains("customers"), "got: {message}");
    assert!(message.contains("name"), "got: {message}");
}

#[test]
fn missing_file_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.csv");
    assert!(load_customers(&path).is_err());
}

#[test]
fn empty_file_is_a_schema_violation() {
    let dir = TempDir::new().expect("temp dir");
    let path = fixture(&dir, "customers.csv", "");
    let error = load_customers(&path).expect_err("no header row");
    assert!(format!("{error}").contains("no header row"));
}
