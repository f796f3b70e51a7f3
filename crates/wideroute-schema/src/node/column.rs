use crate::prelude::*;
use derive_more::Display;

///
/// Column
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[display("{name} {}", value_type.cql_name())]
pub struct Column {
    pub name: String,
    pub value_type: ValueType,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

///
/// KeyKind
///
/// Which of the three column groups a column was declared in.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum KeyKind {
    Partition,
    Clustering,
    Regular,
}
