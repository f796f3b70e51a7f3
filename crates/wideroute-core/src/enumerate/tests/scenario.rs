use crate::{
    catalog::CatalogError,
    enumerate::{EnumerateError, EnumerateOptions, enumerate, enumerate_with},
    error::{ErrorClass, ErrorOrigin},
    operator::Operator,
    test_support::{events_table, shaped_table},
};
use wideroute_schema::prelude::{SchemaError, TableSchema, ValueType};

#[test]
fn events_with_filtering_yields_eight_patterns_in_order() {
    let catalog = enumerate(&events_table(), true).expect("enumerate");

    assert_eq!(
        catalog.ids(),
        vec![
            "findByUserId",
            "findByUserIdAndStatus",
            "findByUserIdAndTs",
            "findByUserIdAndTsLt",
            "findByUserIdAndTsLte",
            "findByUserIdAndTsGt",
            "findByUserIdAndTsGte",
            "findByUserIdAndTsAndStatus",
        ]
    );
}

#[test]
fn events_without_filtering_drops_regular_columns() {
    let catalog = enumerate(&events_table(), false).expect("enumerate");

    assert_eq!(catalog.len(), 6);
    assert!(catalog.iter().all(|p| !p.requires_filtering()));
    assert!(catalog.get("findByUserIdAndStatus").is_none());
}

#[test]
fn events_paths_and_flags() {
    let catalog = enumerate(&events_table(), true).expect("enumerate");

    let base = catalog.get("findByUserId").expect("base");
    assert_eq!(base.path_template(), "/user_id/{user_id}");
    assert!(!base.query_param_style());

    let ranged = catalog.get("findByUserIdAndTsLt").expect("range");
    assert_eq!(ranged.path_template(), "/user_id_ts_lt/{user_id}/{ts}");
    assert!(ranged.query_param_style());
    assert!(!ranged.requires_filtering());
    assert_eq!(
        ranged.range_column().map(|b| b.operator),
        Some(Operator::Lt)
    );

    let filtered = catalog.get("findByUserIdAndTsAndStatus").expect("filtered");
    assert!(filtered.requires_filtering());
    assert_eq!(
        filtered.path_template(),
        "/user_id_ts_status/{user_id}/{ts}/{status}"
    );
}

#[test]
fn partition_only_table_yields_one_pattern() {
    let schema = TableSchema::new("users").with_partition_key("id", ValueType::Uuid);

    for allow_filtering in [false, true] {
        let catalog = enumerate(&schema, allow_filtering).expect("enumerate");
        assert_eq!(catalog.ids(), vec!["findById"]);
    }
}

#[test]
fn composite_partition_key_binds_together() {
    let schema = TableSchema::new("readings")
        .with_partition_key("sensor", ValueType::Text)
        .with_partition_key("day", ValueType::Date);
    let catalog = enumerate(&schema, false).expect("enumerate");

    assert_eq!(catalog.ids(), vec!["findBySensorAndDay"]);
}

#[test]
fn regular_subsets_follow_declared_order() {
    let catalog = enumerate(&shaped_table(1, 0, 3), true).expect("enumerate");

    assert_eq!(
        catalog.ids(),
        vec![
            "findByP0",
            "findByP0AndR0",
            "findByP0AndR1",
            "findByP0AndR2",
            "findByP0AndR0AndR1",
            "findByP0AndR0AndR2",
            "findByP0AndR1AndR2",
            "findByP0AndR0AndR1AndR2",
        ]
    );
}

#[test]
fn missing_partition_key_is_rejected() {
    let schema = TableSchema::new("orphan").with_regular_column("v", ValueType::Int);
    let err = enumerate(&schema, true).expect_err("no partition key");

    assert_eq!(err.class, ErrorClass::Invalid);
    assert_eq!(err.origin, ErrorOrigin::Schema);
    assert!(matches!(
        err.schema_errors().and_then(|tree| tree.first()),
        Some(SchemaError::EmptyPartitionKey { .. })
    ));
}

#[test]
fn duplicate_column_is_rejected() {
    let schema = TableSchema::new("dup")
        .with_partition_key("id", ValueType::Int)
        .with_regular_column("id", ValueType::Text);
    let err = enumerate(&schema, false).expect_err("duplicate");

    assert!(matches!(
        err.schema_errors().and_then(|tree| tree.first()),
        Some(SchemaError::DuplicateColumnName { column, .. }) if column == "id"
    ));
}

#[test]
fn too_many_regular_columns_fails_only_when_filtering() {
    let schema = shaped_table(1, 1, 3);
    let options = EnumerateOptions::new(true).with_max_regular_columns(2);

    let err = enumerate_with(&schema, &options).expect_err("too wide");
    assert_eq!(err.class, ErrorClass::Unsupported);
    assert!(err.to_string().starts_with("enumerator:unsupported:"));
    assert!(matches!(
        err.enumerate_error(),
        Some(EnumerateError::TooManyRegularColumns { count: 3, max: 2, .. })
    ));

    let options = EnumerateOptions::new(false).with_max_regular_columns(2);
    let catalog = enumerate_with(&schema, &options).expect("no filtering");
    assert_eq!(catalog.len(), 6);
}

#[test]
fn colliding_identifiers_are_surfaced() {
    // The clustering column `b_and_c` names the same method as the filtered
    // pattern over regular columns `b` and `c`.
    let schema = TableSchema::new("clash")
        .with_partition_key("a", ValueType::Int)
        .with_clustering_key("b_and_c", ValueType::Int)
        .with_regular_column("b", ValueType::Int)
        .with_regular_column("c", ValueType::Int);

    let err = enumerate(&schema, true).expect_err("collision");

    assert!(err.is_invariant_violation());
    assert_eq!(err.origin, ErrorOrigin::Catalog);
    assert!(matches!(
        err.catalog_error(),
        Some(CatalogError::IdentifierCollision { id, existing, .. })
            if id == "findByAAndBAndC" && existing == "findByAAndBAndC"
    ));

    // Without filtering the regular columns never take part.
    assert!(enumerate(&schema, false).is_ok());
}

#[test]
fn default_options_do_not_bound_regular_columns() {
    assert_eq!(EnumerateOptions::default().max_regular_columns, usize::MAX);

    // 1 + (2^17 - 1) patterns: the base plus every non-empty subset.
    let catalog = enumerate(&shaped_table(1, 0, 17), true).expect("wide table");
    assert_eq!(catalog.len(), 1 << 17);
    let widest = catalog.iter().last().expect("patterns");
    assert_eq!(widest.bound_columns().len(), 18);
}
