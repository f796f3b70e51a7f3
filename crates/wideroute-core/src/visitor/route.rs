use crate::{
    catalog::PatternCatalog, operator::Operator, pattern::AccessPattern, visitor::CatalogVisitor,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wideroute_schema::prelude::{TableSchema, ValueType};

///
/// EndpointRoot
///
/// Route prefix template. `$keyspace` and `$table` are replaced with the
/// table's identity; empty segments and surrounding `/` are dropped, so
/// `api/$keyspace/$table/` over `app.events` expands to `api/app/events`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EndpointRoot(String);

impl EndpointRoot {
    pub const DEFAULT: &'static str = "api/$keyspace/$table";
    pub const KEYSPACE: &'static str = "$keyspace";
    pub const TABLE: &'static str = "$table";

    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn expand(&self, schema: &TableSchema) -> String {
        let keyspace = schema.keyspace.as_deref().unwrap_or_default();
        let expanded = self
            .0
            .replace(Self::KEYSPACE, keyspace)
            .replace(Self::TABLE, &schema.name);

        expanded
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for EndpointRoot {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

///
/// RouteParam
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RouteParam {
    pub name: String,
    pub value_type: ValueType,
    pub operator: Operator,
}

///
/// Route
///
/// One HTTP-style route derived from an access pattern.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Route {
    pub method_id: String,
    pub path: String,
    pub requires_filtering: bool,
    pub query_param_style: bool,
    pub params: Vec<RouteParam>,
}

impl Route {
    fn from_pattern(root: &str, pattern: &AccessPattern) -> Self {
        let path = if root.is_empty() {
            pattern.path_template().to_string()
        } else {
            format!("/{root}{}", pattern.path_template())
        };

        let params = pattern
            .params()
            .map(|(name, value_type, operator)| RouteParam {
                name: name.to_string(),
                value_type,
                operator,
            })
            .collect();

        Self {
            method_id: pattern.id().to_string(),
            path,
            requires_filtering: pattern.requires_filtering(),
            query_param_style: pattern.query_param_style(),
            params,
        }
    }
}

///
/// RouteTable
///
/// Visitor that turns a catalog into routes under one expanded root.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct RouteTable {
    table: String,
    root: String,
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn new(root: &EndpointRoot, schema: &TableSchema) -> Self {
        Self {
            table: schema.qualified_name(),
            root: root.expand(schema),
            routes: Vec::new(),
        }
    }

    /// Build the full route table for one enumerated schema.
    #[must_use]
    pub fn from_catalog(
        root: &EndpointRoot,
        schema: &TableSchema,
        catalog: &PatternCatalog,
    ) -> Self {
        let mut table = Self::new(root, schema);
        catalog.accept(&mut table);

        table
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl CatalogVisitor for RouteTable {
    fn visit_pattern(&mut self, pattern: &AccessPattern) {
        self.routes.push(Route::from_pattern(&self.root, pattern));
    }

    fn finish(&mut self) {
        debug!(
            table = %self.table,
            root = %self.root,
            routes = self.routes.len(),
            "route table built"
        );
    }
}
