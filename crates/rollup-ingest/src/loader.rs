//! Schema-driven record loading.
//!
//! Each entity loads through the same shape: read the table, resolve every
//! declared column against the header once, then decode cells by declared
//! kind. No row is dropped here; undecodable values become nulls.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use rollup_model::{
    CUSTOMER_SCHEMA, EntitySchema, RawCustomer, RawTransaction, SchemaError, TRANSACTION_SCHEMA,
};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::parse::{parse_date, parse_f64, parse_i64};

/// Resolved header position for every declared schema column.
struct ColumnIndex {
    positions: Vec<usize>,
}

impl ColumnIndex {
    /// Match each declared column against the header, case-insensitively.
    ///
    /// Every declared column must be present regardless of its required
    /// flag; absence is a schema violation that aborts the run.
    fn resolve(schema: &EntitySchema, table: &CsvTable) -> Result<Self, SchemaError> {
        if table.headers.is_empty() {
            return Err(SchemaError::EmptyHeader {
                entity: schema.entity,
            });
        }
        let mut positions = Vec::with_capacity(schema.fields.len());
        for field in schema.fields {
            let position = table
                .headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(field.column))
                .ok_or(SchemaError::MissingColumn {
                    entity: schema.entity,
                    column: field.column,
                })?;
            positions.push(position);
        }
        Ok(Self { positions })
    }

    fn cell<'a>(&self, row: &'a [String], field: usize) -> &'a str {
        row.get(self.positions[field]).map(String::as_str).unwrap_or("")
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Load the customers source. The source column `id` decodes into
/// `customer_id`.
pub fn load_customers(path: &Path) -> Result<Vec<RawCustomer>> {
    let table =
        read_csv_table(path).with_context(|| format!("load customers: {}", path.display()))?;
    let index = ColumnIndex::resolve(&CUSTOMER_SCHEMA, &table)?;
    let customers: Vec<RawCustomer> = table
        .rows
        .iter()
        .map(|row| RawCustomer {
            customer_id: parse_i64(index.cell(row, 0)),
            name: non_empty(index.cell(row, 1)),
            state: non_empty(index.cell(row, 2)),
            signup_date: parse_date(index.cell(row, 3)),
        })
        .collect();
    debug!(
        source_file = %path.display(),
        row_count = customers.len(),
        "customers loaded"
    );
    Ok(customers)
}

/// Load the transactions source.
pub fn load_transactions(path: &Path) -> Result<Vec<RawTransaction>> {
    let table =
        read_csv_table(path).with_context(|| format!("load transactions: {}", path.display()))?;
    let index = ColumnIndex::resolve(&TRANSACTION_SCHEMA, &table)?;
    let transactions: Vec<RawTransaction> = table
        .rows
        .iter()
        .map(|row| RawTransaction {
            transaction_id: parse_i64(index.cell(row, 0)),
            customer_id: parse_i64(index.cell(row, 1)),
            amount: parse_f64(index.cell(row, 2)),
            transaction_date: parse_date(index.cell(row, 3)),
        })
        .collect();
    debug!(
        source_file = %path.display(),
        row_count = transactions.len(),
        "transactions loaded"
    );
    Ok(transactions)
}
