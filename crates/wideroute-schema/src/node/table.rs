use crate::{prelude::*, validate::validate_table};

///
/// TableSchema
///
/// One wide-column table split into its three column groups. Partition and
/// clustering keys keep declaration order; regular columns keep the order
/// the provider supplied them in, which is the canonical order used when
/// regular columns are combined.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<String>,

    pub name: String,
    pub partition_keys: Vec<Column>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clustering_keys: Vec<Column>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regular_columns: Vec<Column>,
}

impl TableSchema {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    #[must_use]
    pub fn with_partition_key(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.partition_keys.push(Column::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_clustering_key(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.clustering_keys.push(Column::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_regular_column(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.regular_columns.push(Column::new(name, ty));
        self
    }

    /// `keyspace.name`, or just `name` when no keyspace is known.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.keyspace {
            Some(keyspace) => format!("{keyspace}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Every column tagged with its group, partition keys first.
    pub fn columns(&self) -> impl Iterator<Item = (KeyKind, &Column)> {
        let partition = self.partition_keys.iter().map(|c| (KeyKind::Partition, c));
        let clustering = self.clustering_keys.iter().map(|c| (KeyKind::Clustering, c));
        let regular = self.regular_columns.iter().map(|c| (KeyKind::Regular, c));

        partition.chain(clustering).chain(regular)
    }

    /// Run every structural check and report all failures together.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        validate_table(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> TableSchema {
        TableSchema::new("events")
            .with_keyspace("app")
            .with_partition_key("user_id", ValueType::Int)
            .with_clustering_key("ts", ValueType::Timestamp)
            .with_regular_column("status", ValueType::Text)
    }

    #[test]
    fn columns_are_grouped_in_key_order() {
        let table = events();
        let kinds: Vec<_> = table.columns().map(|(kind, c)| (kind, c.name.as_str())).collect();

        assert_eq!(
            kinds,
            vec![
                (KeyKind::Partition, "user_id"),
                (KeyKind::Clustering, "ts"),
                (KeyKind::Regular, "status"),
            ]
        );
        assert_eq!(table.qualified_name(), "app.events");
    }

    #[test]
    fn schema_deserializes_with_optional_groups() {
        let json = r#"{
            "name": "users",
            "partition_keys": [{ "name": "id", "value_type": "Uuid" }]
        }"#;
        let table: TableSchema = serde_json::from_str(json).expect("schema json");

        assert_eq!(table.partition_keys.len(), 1);
        assert!(table.clustering_keys.is_empty());
        assert!(table.validate().is_ok());
    }
}
