//! Data model for the ledger rollup pipeline.
//!
//! This crate defines the typed records that flow between pipeline stages,
//! the declarative input schemas the loader validates against, and the run
//! accounting types the operator sees.

pub mod error;
pub mod records;
pub mod report;
pub mod schema;

pub use error::SchemaError;
pub use records::{
    Customer, JoinedRecord, MonthlySummary, RawCustomer, RawTransaction, Transaction,
};
pub use report::{CleanCounts, RunReport};
pub use schema::{CUSTOMER_SCHEMA, EntitySchema, FieldKind, FieldSpec, TRANSACTION_SCHEMA};
