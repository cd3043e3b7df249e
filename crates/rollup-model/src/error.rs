use thiserror::Error;

/// A source header does not satisfy the declared entity schema.
///
/// Schema violations are environment failures, not data-quality conditions:
/// they abort the run before any stage executes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{entity}: missing column `{column}` in header")]
    MissingColumn {
        entity: &'static str,
        column: &'static str,
    },
    #[error("{entity}: source has no header row")]
    EmptyHeader { entity: &'static str },
}
