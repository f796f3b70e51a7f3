use crate::{error::InternalError, pattern::AccessPattern, visitor::CatalogVisitor};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error as ThisError;
use tracing::trace;

///
/// CatalogError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CatalogError {
    #[error("pattern '{id}' ({path_template}) collides with existing pattern '{existing}'")]
    IdentifierCollision {
        id: String,
        path_template: String,
        existing: String,
    },
}

///
/// PatternCatalog
///
/// Append-only, insertion-ordered list of access patterns for one table.
/// Both the method id and the path template of every entry are unique;
/// an insert that would break either fails and leaves the catalog unchanged.
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct PatternCatalog {
    patterns: Vec<AccessPattern>,

    #[serde(skip)]
    ids: HashMap<String, usize>,

    #[serde(skip)]
    paths: HashMap<String, usize>,
}

impl PatternCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: AccessPattern) -> Result<(), InternalError> {
        let existing = self
            .ids
            .get(pattern.id())
            .or_else(|| self.paths.get(pattern.path_template()));

        if let Some(&index) = existing {
            return Err(CatalogError::IdentifierCollision {
                id: pattern.id().to_string(),
                path_template: pattern.path_template().to_string(),
                existing: self.patterns[index].id().to_string(),
            }
            .into());
        }

        trace!(
            id = pattern.id(),
            path = pattern.path_template(),
            filtering = pattern.requires_filtering(),
            "catalog insert"
        );

        let index = self.patterns.len();
        self.ids.insert(pattern.id().to_string(), index);
        self.paths.insert(pattern.path_template().to_string(), index);
        self.patterns.push(pattern);

        Ok(())
    }

    /// Patterns in insertion order. Each call starts from the beginning.
    pub fn iter(&self) -> std::slice::Iter<'_, AccessPattern> {
        self.patterns.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AccessPattern> {
        self.ids.get(id).map(|&index| &self.patterns[index])
    }

    /// Walk every pattern in insertion order, then let the visitor finish.
    pub fn accept<V: CatalogVisitor>(&self, visitor: &mut V) {
        for pattern in &self.patterns {
            visitor.visit_pattern(pattern);
        }
        visitor.finish();
    }
}

#[cfg(test)]
impl PatternCatalog {
    pub(crate) fn ids(&self) -> Vec<&str> {
        self.patterns.iter().map(AccessPattern::id).collect()
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a AccessPattern;
    type IntoIter = std::slice::Iter<'a, AccessPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
