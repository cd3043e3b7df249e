use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use rollup_model::{CUSTOMER_SCHEMA, EntitySchema, RunReport, TRANSACTION_SCHEMA};
use rollup_report::{write_run_report_json, write_summary_csv};

use rollup_cli::pipeline::{load, transform};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Column", "Type", "Required"]);
    apply_table_style(&mut table);
    for schema in [&CUSTOMER_SCHEMA, &TRANSACTION_SCHEMA] {
        add_schema_rows(&mut table, schema);
    }
    println!("{table}");
    Ok(())
}

fn add_schema_rows(table: &mut Table, schema: &EntitySchema) {
    for field in schema.fields {
        table.add_row(vec![
            schema.entity,
            field.column,
            field.kind.as_str(),
            if field.required { "yes" } else { "no" },
        ]);
    }
}

pub fn run_rollup(args: &RunArgs) -> Result<RunResult> {
    let data_dir = &args.data_dir;
    let run_span = info_span!("run", data_dir = %data_dir.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let customers_path = args
        .customers
        .clone()
        .unwrap_or_else(|| data_dir.join("customers.csv"));
    let transactions_path = args
        .transactions
        .clone()
        .unwrap_or_else(|| data_dir.join("transactions.csv"));

    let data = load(&customers_path, &transactions_path)?;
    let result = transform(data);

    let mut report = RunReport {
        customers: result.customer_counts,
        transactions: result.transaction_counts,
        orphans_dropped: result.orphans_dropped,
        rows_written: result.summaries.len(),
        output_path: None,
    };

    let mut report_json = None;
    if !args.dry_run {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("output"));
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        let output_path = output_dir.join(&args.output_file);
        info_span!("output", path = %output_path.display())
            .in_scope(|| write_summary_csv(&output_path, &result.summaries))?;
        report.output_path = Some(output_path);
        if args.report_json {
            let report_path = output_dir.join("run_report.json");
            write_run_report_json(&report_path, &report)?;
            report_json = Some(report_path);
        }
    }

    info!(
        rows_written = report.rows_written,
        orphans_dropped = report.orphans_dropped,
        dry_run = args.dry_run,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        report,
        report_json,
        dry_run: args.dry_run,
    })
}
