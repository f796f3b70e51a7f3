use crate::{error::InternalError, naming::pattern_names, operator::Operator};
use serde::{Deserialize, Serialize};
use wideroute_schema::prelude::{Column, KeyKind, ValueType};

///
/// BoundColumn
///
/// One column taking part in a query predicate, in binding order.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BoundColumn {
    pub column: Column,
    pub kind: KeyKind,
    pub operator: Operator,
}

impl BoundColumn {
    #[must_use]
    pub const fn new(column: Column, kind: KeyKind, operator: Operator) -> Self {
        Self {
            column,
            kind,
            operator,
        }
    }

    #[must_use]
    pub const fn equality(column: Column, kind: KeyKind) -> Self {
        Self::new(column, kind, Operator::Eq)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.column.name
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.column.value_type
    }

    /// Same column, different operator.
    #[must_use]
    pub fn with_operator(&self, operator: Operator) -> Self {
        Self::new(self.column.clone(), self.kind, operator)
    }
}

///
/// AccessPattern
///
/// One legal query shape over a table: the bound columns plus the method id
/// and route template derived from them. Ids and templates are computed at
/// construction and never change afterwards.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccessPattern {
    id: String,
    bound_columns: Vec<BoundColumn>,
    requires_filtering: bool,
    path_template: String,
    query_param_style: bool,
}

impl AccessPattern {
    ///
    /// Build a pattern from its bound columns.
    /// Binding any regular column makes the pattern a filtered scan; a
    /// trailing range operator marks its bounds as query-parameter style.
    ///
    pub fn new(bound_columns: Vec<BoundColumn>) -> Result<Self, InternalError> {
        let names = pattern_names(&bound_columns)?;
        let requires_filtering = bound_columns.iter().any(|b| b.kind == KeyKind::Regular);
        let query_param_style = bound_columns.last().is_some_and(|b| b.operator.is_range());

        Ok(Self {
            id: names.id,
            bound_columns,
            requires_filtering,
            path_template: names.path_template,
            query_param_style,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn bound_columns(&self) -> &[BoundColumn] {
        &self.bound_columns
    }

    #[must_use]
    pub const fn requires_filtering(&self) -> bool {
        self.requires_filtering
    }

    #[must_use]
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    #[must_use]
    pub const fn query_param_style(&self) -> bool {
        self.query_param_style
    }

    /// The bound column carrying a range operator, if any.
    #[must_use]
    pub fn range_column(&self) -> Option<&BoundColumn> {
        self.bound_columns.iter().find(|b| b.operator.is_range())
    }

    /// Bound columns of one group, in binding order.
    pub fn columns_of(&self, kind: KeyKind) -> impl Iterator<Item = &BoundColumn> {
        self.bound_columns.iter().filter(move |b| b.kind == kind)
    }

    /// `(name, type, operator)` per bound column: the generated method's
    /// parameter list.
    pub fn params(&self) -> impl Iterator<Item = (&str, ValueType, Operator)> {
        self.bound_columns
            .iter()
            .map(|b| (b.name(), b.value_type(), b.operator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clustering, partition, regular};

    #[test]
    fn equality_key_pattern_is_not_filtered() {
        let pattern = AccessPattern::new(vec![
            partition("user_id", ValueType::Int),
            clustering("ts", ValueType::Timestamp),
        ])
        .expect("pattern");

        assert_eq!(pattern.id(), "findByUserIdAndTs");
        assert_eq!(pattern.path_template(), "/user_id_ts/{user_id}/{ts}");
        assert!(!pattern.requires_filtering());
        assert!(!pattern.query_param_style());
        assert!(pattern.range_column().is_none());
    }

    #[test]
    fn regular_column_forces_filtering() {
        let pattern = AccessPattern::new(vec![
            partition("user_id", ValueType::Int),
            regular("status", ValueType::Text),
        ])
        .expect("pattern");

        assert!(pattern.requires_filtering());
        assert_eq!(pattern.columns_of(KeyKind::Regular).count(), 1);
    }

    #[test]
    fn trailing_range_is_query_param_style() {
        let pattern = AccessPattern::new(vec![
            partition("user_id", ValueType::Int),
            clustering("ts", ValueType::Timestamp).with_operator(Operator::Gte),
        ])
        .expect("pattern");

        assert!(pattern.query_param_style());
        assert_eq!(pattern.range_column().map(BoundColumn::name), Some("ts"));

        let params: Vec<_> = pattern.params().collect();
        assert_eq!(
            params,
            vec![
                ("user_id", ValueType::Int, Operator::Eq),
                ("ts", ValueType::Timestamp, Operator::Gte),
            ]
        );
    }

    #[test]
    fn serializes_for_emitters() {
        let pattern = AccessPattern::new(vec![partition("id", ValueType::Uuid)]).expect("pattern");
        let json = serde_json::to_value(&pattern).expect("json");

        assert_eq!(json["id"], "findById");
        assert_eq!(json["path_template"], "/id/{id}");
        assert_eq!(json["bound_columns"][0]["operator"], "Eq");
        assert_eq!(json["bound_columns"][0]["kind"], "Partition");
    }
}
