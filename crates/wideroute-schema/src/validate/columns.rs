use crate::{error::SchemaError, prelude::*};
use std::collections::BTreeSet;

/// A table without partition keys has no base access pattern.
pub fn validate_partition_key(table: &TableSchema, errs: &mut ErrorTree) {
    if table.partition_keys.is_empty() {
        errs.add(SchemaError::EmptyPartitionKey {
            table: table.qualified_name(),
        });
    }
}

// Column names share one namespace across all three groups.
pub fn validate_unique_columns(table: &TableSchema, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();

    for (_, column) in table.columns() {
        let name = column.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            errs.add(SchemaError::DuplicateColumnName {
                table: table.qualified_name(),
                column: name.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partition_key_is_reported() {
        let table = TableSchema::new("t").with_regular_column("v", ValueType::Text);
        let err = table.validate().expect_err("no partition key");

        assert!(matches!(
            err.first(),
            Some(SchemaError::EmptyPartitionKey { table }) if table == "t"
        ));
    }

    #[test]
    fn duplicate_across_groups_is_reported_once() {
        let table = TableSchema::new("t")
            .with_partition_key("id", ValueType::Int)
            .with_clustering_key("id", ValueType::Int)
            .with_regular_column("id", ValueType::Text);
        let err = table.validate().expect_err("duplicate column");

        assert_eq!(err.len(), 1);
        assert!(matches!(
            err.first(),
            Some(SchemaError::DuplicateColumnName { column, .. }) if column == "id"
        ));
    }

    #[test]
    fn collects_every_failure() {
        let table = TableSchema::new("t")
            .with_clustering_key("c", ValueType::Int)
            .with_regular_column("c", ValueType::Int);
        let err = table.validate().expect_err("two failures");

        assert_eq!(err.len(), 2);
    }
}
