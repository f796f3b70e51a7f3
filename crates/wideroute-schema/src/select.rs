//! Table selection lists, e.g. `app.events,users`.
//!
//! Entries are folded the way the DDL parser folds identifiers: unquoted
//! names are lower-cased, double-quoted names keep their case.

use crate::node::TableSchema;
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// SelectError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SelectError {
    #[error("table list is empty")]
    Empty,

    #[error("bad table entry '{0}', expected 'table' or 'keyspace.table'")]
    BadEntry(String),

    #[error("table '{0}' was selected but not found")]
    NotFound(String),
}

///
/// TableRef
///
/// A bare `table` only matches tables declared without a keyspace.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TableRef {
    pub keyspace: Option<String>,
    pub table: String,
}

impl TableRef {
    #[must_use]
    pub fn matches(&self, schema: &TableSchema) -> bool {
        schema.keyspace.as_deref() == self.keyspace.as_deref() && schema.name == self.table
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyspace {
            Some(keyspace) => write!(f, "{keyspace}.{}", self.table),
            None => f.write_str(&self.table),
        }
    }
}

impl FromStr for TableRef {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        let bad = || SelectError::BadEntry(entry.to_string());

        let parts = split_entry(entry)
            .into_iter()
            .map(fold_ident)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(bad)?;

        match <[String; 2]>::try_from(parts) {
            Ok([keyspace, table]) => Ok(Self {
                keyspace: Some(keyspace),
                table,
            }),
            Err(parts) => match <[String; 1]>::try_from(parts) {
                Ok([table]) => Ok(Self {
                    keyspace: None,
                    table,
                }),
                Err(_) => Err(bad()),
            },
        }
    }
}

// Split on dots outside double quotes.
fn split_entry(entry: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quoted = false;
    let mut start = 0;

    for (i, c) in entry.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '.' if !quoted => {
                parts.push(&entry[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&entry[start..]);

    parts
}

// `"Name"` keeps its case with `""` unescaped; anything else is lower-cased.
// Empty names, stray quotes and embedded whitespace are rejected.
fn fold_ident(part: &str) -> Option<String> {
    if let Some(inner) = part
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        if inner.is_empty() || inner.replace("\"\"", "").contains('"') {
            return None;
        }
        return Some(inner.replace("\"\"", "\""));
    }

    if part.is_empty() || part.contains('"') || part.chars().any(char::is_whitespace) {
        return None;
    }

    Some(part.to_lowercase())
}

///
/// TableSelector
///
/// Either every parsed table, or an explicit ordered list of tables.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum TableSelector {
    #[default]
    All,
    Only(Vec<TableRef>),
}

impl TableSelector {
    /// Keep the selected tables, in selector order for explicit lists.
    pub fn select(&self, tables: Vec<TableSchema>) -> Result<Vec<TableSchema>, SelectError> {
        let Self::Only(refs) = self else {
            return Ok(tables);
        };

        refs.iter()
            .map(|table_ref| {
                tables
                    .iter()
                    .find(|schema| table_ref.matches(schema))
                    .cloned()
                    .ok_or_else(|| SelectError::NotFound(table_ref.to_string()))
            })
            .collect()
    }
}

/// Parse a comma-separated list of `table` or `keyspace.table` entries.
pub fn parse_table_list(list: &str) -> Result<TableSelector, SelectError> {
    let refs = list
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<TableRef>, _>>()?;

    if refs.is_empty() {
        return Err(SelectError::Empty);
    }

    Ok(TableSelector::Only(refs))
}
