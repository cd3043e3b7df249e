//! Machine-readable run report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rollup_model::RunReport;

/// Write the run accounting as pretty-printed JSON.
pub fn write_run_report_json(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write run report: {}", path.display()))?;
    Ok(())
}
