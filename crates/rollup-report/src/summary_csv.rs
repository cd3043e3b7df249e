//! The monthly summary CSV.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use rollup_model::MonthlySummary;

const HEADER: [&str; 5] = [
    "customer_id",
    "name",
    "year_month",
    "total_amount",
    "transaction_count",
];

/// Render the summary set to CSV text.
///
/// `total_amount` carries exactly two decimals; a null name renders as an
/// empty cell. Rows are written in the order given — ordering is the
/// transform's job, not the writer's.
pub fn render_summary_csv(summaries: &[MonthlySummary]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADER).context("write header")?;
    for summary in summaries {
        writer
            .write_record([
                summary.customer_id.to_string(),
                summary.name.clone().unwrap_or_default(),
                summary.year_month.clone(),
                format!("{:.2}", summary.total_amount),
                summary.transaction_count.to_string(),
            ])
            .context("write summary row")?;
    }
    let bytes = writer.into_inner().context("flush summary csv")?;
    String::from_utf8(bytes).context("summary csv is not utf-8")
}

/// Write the summary CSV to `path`, atomically.
///
/// The content lands in a temporary sibling first and is renamed into
/// place; within one directory the rename is atomic on POSIX, so the
/// destination is either the previous file or the complete new one.
pub fn write_summary_csv(path: &Path, summaries: &[MonthlySummary]) -> Result<()> {
    let content = render_summary_csv(summaries)?;
    let file_name = path
        .file_name()
        .with_context(|| format!("output path has no file name: {}", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, content)
        .with_context(|| format!("write summary: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("finalize summary: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(
        customer_id: i64,
        name: Option<&str>,
        year_month: &str,
        total_amount: f64,
        transaction_count: usize,
    ) -> MonthlySummary {
        MonthlySummary {
            customer_id,
            name: name.map(String::from),
            year_month: year_month.to_string(),
            total_amount,
            transaction_count,
        }
    }

    #[test]
    fn renders_two_decimal_totals() {
        let rows = vec![
            summary(1, Some("Ann"), "2024-01", 15.0, 2),
            summary(2, Some("Bob"), "2024-02", 3.5, 1),
        ];
        let csv = render_summary_csv(&rows).expect("render");
        insta::assert_snapshot!(csv, @r"
        customer_id,name,year_month,total_amount,transaction_count
        1,Ann,2024-01,15.00,2
        2,Bob,2024-02,3.50,1
        ");
    }

    #[test]
    fn empty_set_renders_header_only() {
        let csv = render_summary_csv(&[]).expect("render");
        assert_eq!(
            csv,
            "customer_id,name,year_month,total_amount,transaction_count\n"
        );
    }

    #[test]
    fn null_name_renders_as_empty_cell() {
        let rows = vec![summary(9, None, "2024-03", 2.0, 1)];
        let csv = render_summary_csv(&rows).expect("render");
        assert!(csv.contains("9,,2024-03,2.00,1"));
    }
}
