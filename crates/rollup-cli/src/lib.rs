//! CLI library components for the ledger rollup.

pub mod logging;
pub mod pipeline;
