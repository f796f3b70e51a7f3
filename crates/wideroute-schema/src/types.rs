use crate::prelude::*;
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// ValueType
///
/// Semantic type tag carried by every column. Mirrors the CQL native types;
/// anything that is not a native scalar collapses into `Collection` or
/// `Custom`. Mapping a tag onto a target-language type belongs to emitters.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum ValueType {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Collection,
    Counter,
    Custom,
    Date,
    Decimal,
    Double,
    Duration,
    Float,
    Inet,
    Int,
    Smallint,
    Text,
    Time,
    Timestamp,
    Timeuuid,
    Tinyint,
    Uuid,
    Varchar,
    Varint,
}

impl ValueType {
    /// Lower-case CQL spelling of the tag.
    #[must_use]
    pub const fn cql_name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Bigint => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Collection => "collection",
            Self::Counter => "counter",
            Self::Custom => "custom",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Duration => "duration",
            Self::Float => "float",
            Self::Inet => "inet",
            Self::Int => "int",
            Self::Smallint => "smallint",
            Self::Text => "text",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Timeuuid => "timeuuid",
            Self::Tinyint => "tinyint",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
            Self::Varint => "varint",
        }
    }

    ///
    /// Resolve a CQL type expression into a tag.
    /// Generic and frozen types become `Collection`; unknown names `Custom`.
    ///
    #[must_use]
    pub fn from_cql(type_expr: &str) -> Self {
        let expr = type_expr.trim();
        if expr.contains('<') {
            return Self::Collection;
        }

        expr.parse().unwrap_or(Self::Custom)
    }
}

///
/// UnknownValueType
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("unknown CQL value type '{0}'")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Self::Ascii,
            "bigint" => Self::Bigint,
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "counter" => Self::Counter,
            "date" => Self::Date,
            "decimal" => Self::Decimal,
            "double" => Self::Double,
            "duration" => Self::Duration,
            "float" => Self::Float,
            "inet" => Self::Inet,
            "int" => Self::Int,
            "smallint" => Self::Smallint,
            "text" => Self::Text,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            "timeuuid" => Self::Timeuuid,
            "tinyint" => Self::Tinyint,
            "uuid" => Self::Uuid,
            "varchar" => Self::Varchar,
            "varint" => Self::Varint,
            "list" | "set" | "map" | "tuple" | "frozen" => Self::Collection,
            _ => return Err(UnknownValueType(s.to_string())),
        };

        Ok(ty)
    }
}
