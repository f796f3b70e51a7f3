//! Naming rules: a pure mapping from an ordered list of bound columns to a
//! method identifier and a route template.
//!
//! Method ids read `findBy` + each column name in PascalCase, joined by
//! `And`, with the range operator's suffix appended once at the end
//! (`findByUserIdAndTsGte`). Route templates join the raw column names with
//! `_`, append the lower-case suffix, then one `{name}` placeholder per
//! bound column (`/user_id_ts_gte/{user_id}/{ts}`).

use crate::{error::InternalError, pattern::BoundColumn};
use convert_case::{Case, Casing};

/// Prefix every generated method id starts with.
pub const METHOD_PREFIX: &str = "findBy";

/// Joiner placed between column names inside a method id.
pub const METHOD_JOINER: &str = "And";

///
/// PatternNames
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternNames {
    pub id: String,
    pub path_template: String,
}

/// Derive both identifiers for a bound-column list.
pub fn pattern_names(bound: &[BoundColumn]) -> Result<PatternNames, InternalError> {
    check_shape(bound)?;

    Ok(PatternNames {
        id: method_id(bound)?,
        path_template: path_template(bound),
    })
}

/// Upper-case the first letter of each word of a column name.
#[must_use]
pub fn pascal_name(name: &str) -> String {
    name.to_case(Case::Pascal)
}

// Only the final bound column may carry a range operator, and a pattern
// binds at least one column.
fn check_shape(bound: &[BoundColumn]) -> Result<(), InternalError> {
    let Some((_, head)) = bound.split_last() else {
        return Err(InternalError::naming_invariant(
            "cannot name a pattern with no bound columns",
        ));
    };

    if let Some(misplaced) = head.iter().find(|b| b.operator.is_range()) {
        return Err(InternalError::naming_invariant(format!(
            "range operator '{}' on '{}' is not in the last position",
            misplaced.operator,
            misplaced.name()
        )));
    }

    Ok(())
}

fn method_id(bound: &[BoundColumn]) -> Result<String, InternalError> {
    let mut id = String::from(METHOD_PREFIX);

    for (i, b) in bound.iter().enumerate() {
        let word = pascal_name(b.name());
        if word.is_empty() {
            return Err(InternalError::naming_invariant(format!(
                "column '{}' has no characters usable in a method id",
                b.name()
            )));
        }
        if i > 0 {
            id.push_str(METHOD_JOINER);
        }
        id.push_str(&word);
    }

    if let Some(last) = bound.last() {
        id.push_str(last.operator.id_suffix());
    }

    Ok(id)
}

fn path_template(bound: &[BoundColumn]) -> String {
    let names: Vec<&str> = bound.iter().map(BoundColumn::name).collect();
    let mut path = format!("/{}", names.join("_"));

    if let Some(last) = bound.last()
        && last.operator.is_range()
    {
        path.push('_');
        path.push_str(last.operator.path_suffix());
    }

    for name in names {
        path.push_str("/{");
        path.push_str(name);
        path.push('}');
    }

    path
}
