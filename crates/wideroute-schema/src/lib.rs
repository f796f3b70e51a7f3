//! Table schema model for wideroute: columns, semantic value types, the
//! three-way key split of a wide-column table, validation, and the offline
//! CQL `CREATE TABLE` provider.

pub mod ddl;
pub mod error;
pub mod node;
pub mod select;
pub mod types;
pub mod validate;

/// Maximum length for column identifiers.
pub const MAX_COLUMN_NAME_LEN: usize = 64;

/// Maximum length for table and keyspace identifiers.
pub const MAX_TABLE_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{ErrorTree, SchemaError},
        node::{Column, KeyKind, TableSchema},
        types::ValueType,
    };
    pub use serde::{Deserialize, Serialize};
}
