use std::path::PathBuf;

use rollup_model::RunReport;

#[derive(Debug)]
pub struct RunResult {
    pub report: RunReport,
    /// Where the JSON run report landed, when requested.
    pub report_json: Option<PathBuf>,
    pub dry_run: bool,
}
