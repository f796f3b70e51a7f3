//! Core of wideroute: the access-pattern enumerator, the naming rules that
//! stamp every pattern with a method id and a route template, the
//! uniqueness-checked catalog, and the visitor seam emitters plug into.
#![warn(unreachable_pub)]

pub mod catalog;
pub mod enumerate;
pub mod error;
pub mod naming;
pub mod operator;
pub mod pattern;
pub mod visitor;

#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Bound on regular columns that config-driven runs apply when filtering is
/// enabled. Each regular column doubles the filtered-pattern count per
/// anchor; library callers of `enumerate` are not bounded by it.
pub const DEFAULT_MAX_REGULAR_COLUMNS: usize = 16;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        catalog::PatternCatalog,
        enumerate::{EnumerateOptions, enumerate, enumerate_with},
        operator::Operator,
        pattern::{AccessPattern, BoundColumn},
        visitor::{CatalogVisitor, EndpointRoot, Route, RouteTable},
    };
    pub use wideroute_schema::prelude::{Column, KeyKind, TableSchema, ValueType};
}
