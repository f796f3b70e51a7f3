//! Access-pattern enumeration.
//!
//! Walks one table schema and emits every query shape the storage layer can
//! serve, in a fixed traversal order:
//!
//! 1. the base pattern binding every partition key with `=`;
//! 2. for each clustering prefix length `j`, the all-equality prefix followed
//!    by its four range variants on the `j`-th clustering column;
//! 3. when filtering is enabled, every non-empty subset of the regular
//!    columns attached to the base pattern and to each equality prefix,
//!    right after that anchor's own patterns.
//!
//! Range variants are terminal: nothing is ever bound after an inequality.

mod combinations;

#[cfg(test)]
mod tests;

use crate::{
    catalog::PatternCatalog,
    error::InternalError,
    operator::Operator,
    pattern::{AccessPattern, BoundColumn},
};
use combinations::non_empty_subsets;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::debug;
use wideroute_schema::prelude::{KeyKind, TableSchema};

///
/// EnumerateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EnumerateError {
    #[error(
        "table '{table}' has {count} regular columns; filtered enumeration supports at most {max}"
    )]
    TooManyRegularColumns {
        table: String,
        count: usize,
        max: usize,
    },
}

///
/// EnumerateOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumerateOptions {
    /// Emit filtered-scan patterns over regular columns.
    pub allow_filtering: bool,

    /// Upper bound on regular columns combined when filtering is enabled.
    /// Each extra column doubles the filtered pattern count per anchor.
    /// Unbounded unless a caller opts in.
    pub max_regular_columns: usize,
}

impl EnumerateOptions {
    #[must_use]
    pub const fn new(allow_filtering: bool) -> Self {
        Self {
            allow_filtering,
            max_regular_columns: usize::MAX,
        }
    }

    #[must_use]
    pub const fn with_max_regular_columns(mut self, max: usize) -> Self {
        self.max_regular_columns = max;
        self
    }
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Enumerate every access pattern of a table, with no bound on the number
/// of regular columns.
pub fn enumerate(
    schema: &TableSchema,
    allow_filtering: bool,
) -> Result<PatternCatalog, InternalError> {
    enumerate_with(schema, &EnumerateOptions::new(allow_filtering))
}

/// Enumerate a table's access patterns.
///
/// The schema is validated first; a rejected schema, or a regular column
/// set wider than `options.max_regular_columns`, fails before any pattern
/// is built.
pub fn enumerate_with(
    schema: &TableSchema,
    options: &EnumerateOptions,
) -> Result<PatternCatalog, InternalError> {
    // Phase 1: reject inputs we cannot enumerate.
    schema.validate().map_err(InternalError::schema_invalid)?;

    let filtering = options.allow_filtering && !schema.regular_columns.is_empty();
    let count = schema.regular_columns.len();
    if filtering && count > options.max_regular_columns {
        return Err(EnumerateError::TooManyRegularColumns {
            table: schema.qualified_name(),
            count,
            max: options.max_regular_columns,
        }
        .into());
    }

    // Phase 2: walk the key hierarchy.
    let mut walker = Walker::new(schema, filtering);
    walker.run()?;
    let catalog = walker.catalog;

    debug!(
        table = %schema.qualified_name(),
        patterns = catalog.len(),
        filtering,
        partition_keys = schema.partition_keys.len(),
        clustering_keys = schema.clustering_keys.len(),
        regular_columns = count,
        "enumerated access patterns"
    );

    Ok(catalog)
}

///
/// Walker
///
/// One enumeration pass over a validated schema.
///

struct Walker<'a> {
    schema: &'a TableSchema,
    filtering: bool,
    regular: Vec<BoundColumn>,
    catalog: PatternCatalog,
}

impl<'a> Walker<'a> {
    fn new(schema: &'a TableSchema, filtering: bool) -> Self {
        let regular = schema
            .regular_columns
            .iter()
            .map(|c| BoundColumn::equality(c.clone(), KeyKind::Regular))
            .collect();

        Self {
            schema,
            filtering,
            regular,
            catalog: PatternCatalog::new(),
        }
    }

    fn run(&mut self) -> Result<(), InternalError> {
        let schema = self.schema;
        let mut anchor: Vec<BoundColumn> = schema
            .partition_keys
            .iter()
            .map(|c| BoundColumn::equality(c.clone(), KeyKind::Partition))
            .collect();

        self.emit(anchor.clone())?;
        self.attach_regular(&anchor)?;

        for column in &schema.clustering_keys {
            let last = BoundColumn::equality(column.clone(), KeyKind::Clustering);
            anchor.push(last.clone());
            self.emit(anchor.clone())?;

            let prefix = &anchor[..anchor.len() - 1];
            for op in Operator::RANGE {
                let mut ranged = prefix.to_vec();
                ranged.push(last.with_operator(op));
                self.emit(ranged)?;
            }

            self.attach_regular(&anchor)?;
        }

        Ok(())
    }

    // Every non-empty subset of the regular columns, bound with `=` after
    // an all-equality anchor.
    fn attach_regular(&mut self, anchor: &[BoundColumn]) -> Result<(), InternalError> {
        if !self.filtering {
            return Ok(());
        }

        for subset in non_empty_subsets(self.regular.len()) {
            let mut bound = anchor.to_vec();
            bound.extend(subset.into_iter().map(|i| self.regular[i].clone()));
            self.emit(bound)?;
        }

        Ok(())
    }

    fn emit(&mut self, bound: Vec<BoundColumn>) -> Result<(), InternalError> {
        let pattern = AccessPattern::new(bound)?;
        self.catalog.insert(pattern)
    }
}
