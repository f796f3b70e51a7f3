//! End-to-end pipeline: DDL text → selected tables → one catalog and one
//! route table per table.

use crate::Error;
use serde::Serialize;
use tracing::debug;
use wideroute_config::WiderouteConfig;
use wideroute_core::{
    catalog::PatternCatalog,
    enumerate::{EnumerateOptions, enumerate_with},
    visitor::{EndpointRoot, RouteTable},
};
use wideroute_schema::{
    ddl::{DdlError, parse_statements},
    node::TableSchema,
    select::{TableSelector, parse_table_list},
};

///
/// PlanOptions
///

#[derive(Clone, Debug, Default)]
pub struct PlanOptions {
    pub enumerate: EnumerateOptions,
    pub endpoint_root: EndpointRoot,
    pub tables: TableSelector,
}

impl PlanOptions {
    /// Options carried by a config, validated first so values assembled
    /// outside the loader get the same bounds.
    pub fn from_config(config: &WiderouteConfig) -> Result<Self, Error> {
        config.validate()?;

        let generate = &config.generate;
        let tables = if config.input.tables.is_empty() {
            TableSelector::All
        } else {
            parse_table_list(&config.input.tables.join(","))?
        };

        Ok(Self {
            enumerate: EnumerateOptions::new(generate.allow_filtering)
                .with_max_regular_columns(generate.max_regular_columns),
            endpoint_root: generate.endpoint_root(),
            tables,
        })
    }
}

///
/// TablePlan
///
/// Everything generated for one table.
///

#[derive(Clone, Debug, Serialize)]
pub struct TablePlan {
    pub schema: TableSchema,
    pub catalog: PatternCatalog,
    pub routes: RouteTable,
}

impl TablePlan {
    #[must_use]
    pub fn name(&self) -> String {
        self.schema.qualified_name()
    }
}

/// Enumerate one schema and derive its routes.
pub fn plan_table(schema: TableSchema, options: &PlanOptions) -> Result<TablePlan, Error> {
    let catalog = enumerate_with(&schema, &options.enumerate)?;
    let routes = RouteTable::from_catalog(&options.endpoint_root, &schema, &catalog);

    Ok(TablePlan {
        schema,
        catalog,
        routes,
    })
}

/// Parse DDL, apply the table selection, and plan every remaining table.
/// The first failing table aborts the run.
pub fn plan_ddl(ddl: &str, options: &PlanOptions) -> Result<Vec<TablePlan>, Error> {
    let parsed = parse_statements(ddl)?;
    if parsed.is_empty() {
        return Err(DdlError::NoTables.into());
    }
    let selected = options.tables.select(parsed)?;
    debug!(tables = selected.len(), "planning tables");

    selected
        .into_iter()
        .map(|schema| plan_table(schema, options))
        .collect()
}
