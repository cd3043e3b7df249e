//! Declarative input schemas.
//!
//! One constant per source entity: column name, declared kind, and whether a
//! null value removes the row during cleaning. The loader validates column
//! presence against these once at load time; `rollup schema` prints them for
//! the operator.

/// Declared type of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Decimal,
    /// Parsed permissively; unparseable values load as null.
    Date,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Text => "text",
            FieldKind::Decimal => "decimal",
            FieldKind::Date => "date",
        }
    }
}

/// One declared source column.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name as it appears in the source header.
    pub column: &'static str,
    pub kind: FieldKind,
    /// Required columns form the cleaner's completeness set: a null in any
    /// of them drops the row. Optional columns may stay null forever.
    pub required: bool,
}

/// The declared schema of one source entity.
///
/// Presence of every declared column in the header is mandatory regardless
/// of `required`; `required` governs value nullability only.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Columns whose null values drop the row during cleaning.
    pub fn required_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.column)
    }
}

/// Customers source. The `id` column is renamed to `customer_id` on decode.
pub const CUSTOMER_SCHEMA: EntitySchema = EntitySchema {
    entity: "customers",
    fields: &[
        FieldSpec {
            column: "id",
            kind: FieldKind::Integer,
            required: true,
        },
        FieldSpec {
            column: "name",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            column: "state",
            kind: FieldKind::Text,
            required: false,
        },
        FieldSpec {
            column: "signup_date",
            kind: FieldKind::Date,
            required: false,
        },
    ],
};

/// Transactions source. Every column feeds the summary, so all are required.
pub const TRANSACTION_SCHEMA: EntitySchema = EntitySchema {
    entity: "transactions",
    fields: &[
        FieldSpec {
            column: "transaction_id",
            kind: FieldKind::Integer,
            required: true,
        },
        FieldSpec {
            column: "customer_id",
            kind: FieldKind::Integer,
            required: true,
        },
        FieldSpec {
            column: "amount",
            kind: FieldKind::Decimal,
            required: true,
        },
        FieldSpec {
            column: "transaction_date",
            kind: FieldKind::Date,
            required: true,
        },
    ],
};
