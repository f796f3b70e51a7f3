//! Table validation orchestration.

pub mod columns;
pub mod naming;

use crate::{error::ErrorTree, node::TableSchema};

/// Run full table validation in a staged, deterministic order.
pub(crate) fn validate_table(table: &TableSchema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    // Phase 1: identifiers on their own.
    naming::validate_table_naming(table, &mut errs);

    // Phase 2: key shape and cross-group invariants.
    columns::validate_partition_key(table, &mut errs);
    columns::validate_unique_columns(table, &mut errs);

    errs.result()
}
