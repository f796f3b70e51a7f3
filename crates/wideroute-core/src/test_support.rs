use crate::pattern::BoundColumn;
use wideroute_schema::prelude::{Column, KeyKind, TableSchema, ValueType};

pub(crate) fn partition(name: &str, ty: ValueType) -> BoundColumn {
    BoundColumn::equality(Column::new(name, ty), KeyKind::Partition)
}

pub(crate) fn clustering(name: &str, ty: ValueType) -> BoundColumn {
    BoundColumn::equality(Column::new(name, ty), KeyKind::Clustering)
}

pub(crate) fn regular(name: &str, ty: ValueType) -> BoundColumn {
    BoundColumn::equality(Column::new(name, ty), KeyKind::Regular)
}

/// `events(user_id int, ts timestamp, status text, PRIMARY KEY (user_id, ts))`
pub(crate) fn events_table() -> TableSchema {
    TableSchema::new("events")
        .with_keyspace("app")
        .with_partition_key("user_id", ValueType::Int)
        .with_clustering_key("ts", ValueType::Timestamp)
        .with_regular_column("status", ValueType::Text)
}

/// Generated table with `p` partition keys, `c` clustering keys and `r`
/// regular columns, named `p0..`, `c0..`, `r0..`.
pub(crate) fn shaped_table(p: usize, c: usize, r: usize) -> TableSchema {
    let mut table = TableSchema::new("shaped");
    for i in 0..p {
        table = table.with_partition_key(format!("p{i}"), ValueType::Int);
    }
    for i in 0..c {
        table = table.with_clustering_key(format!("c{i}"), ValueType::Timestamp);
    }
    for i in 0..r {
        table = table.with_regular_column(format!("r{i}"), ValueType::Text);
    }

    table
}
