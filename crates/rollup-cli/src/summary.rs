use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rollup_model::CleanCounts;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Input"),
        header_cell("Null drops"),
        header_cell("Dup drops"),
        header_cell("Surviving"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    add_entity_row(&mut table, "customers", &report.customers);
    add_entity_row(&mut table, "transactions", &report.transactions);
    println!("{table}");
    println!(
        "Orphaned transactions dropped: {}",
        report.orphans_dropped
    );
    println!("Rows written: {}", report.rows_written);
    match &report.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: skipped (dry run)"),
        None => {}
    }
    if let Some(path) = &result.report_json {
        println!("Run report: {}", path.display());
    }
}

fn add_entity_row(table: &mut Table, entity: &str, counts: &CleanCounts) {
    table.add_row(vec![
        Cell::new(entity)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.input),
        count_cell(counts.nulls_dropped),
        count_cell(counts.duplicates_dropped),
        Cell::new(counts.surviving()).add_attribute(Attribute::Bold),
    ]);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
