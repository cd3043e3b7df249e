//! Output writers for the ledger rollup.
//!
//! The summary CSV write is all-or-nothing: content is rendered to a
//! temporary sibling file and renamed over the destination, so a failed run
//! never leaves a partial output behind.

pub mod run_report;
pub mod summary_csv;

pub use run_report::write_run_report_json;
pub use summary_csv::{render_summary_csv, write_summary_csv};
