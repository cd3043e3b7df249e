//! Run accounting surfaced to the operator.
//!
//! Data-quality drops are routine occurrences, not errors: every stage
//! counts what it removed and the counts travel here. [`RunReport`]
//! serializes for the optional JSON sidecar report.

use std::path::PathBuf;

/// Drop accounting for one entity's cleaning pass.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct CleanCounts {
    /// Rows loaded before any cleaning.
    pub input: usize,
    /// Rows dropped for a null required field.
    pub nulls_dropped: usize,
    /// Rows dropped as duplicate natural keys (first occurrence kept).
    pub duplicates_dropped: usize,
}

impl CleanCounts {
    /// Rows surviving both cleaning policies.
    pub fn surviving(&self) -> usize {
        self.input - self.nulls_dropped - self.duplicates_dropped
    }
}

/// Full accounting for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub customers: CleanCounts,
    pub transactions: CleanCounts,
    /// Transactions dropped for referencing a customer absent from the
    /// cleaned customer set.
    pub orphans_dropped: usize,
    /// Rows in the written summary, header excluded.
    pub rows_written: usize,
    /// Where the summary landed; `None` on a dry run.
    pub output_path: Option<PathBuf>,
}
