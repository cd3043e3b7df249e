//! CSV ingestion for the ledger rollup pipeline.
//!
//! Reading is deliberately forgiving: headers are matched
//! case-insensitively, blank lines are skipped, short rows are padded, and
//! cell values that fail to decode become nulls for the cleaner to count.
//! The only fatal conditions are an unreadable file and a header missing a
//! declared column.

pub mod csv_table;
pub mod loader;
pub mod parse;

pub use csv_table::{CsvTable, read_csv_table};
pub use loader::{load_customers, load_transactions};
pub use parse::{parse_date, parse_f64, parse_i64};
