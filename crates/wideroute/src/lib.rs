//! ## Crate layout
//! - `schema`: table model, validation, CQL DDL provider, table selection.
//! - `core`: access-pattern enumeration, naming, catalog, route visitor.
//! - `config`: `wideroute.toml` loading.
//! - `plan`: one-call pipeline from DDL text to catalogs and routes.
//! - `error`: public error type with a stable kind + origin taxonomy.

pub use wideroute_config as config;
pub use wideroute_core as core;
pub use wideroute_schema as schema;

pub mod error;
pub mod plan;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        plan::{PlanOptions, TablePlan, plan_ddl, plan_table},
    };
    pub use wideroute_core::prelude::*;
    pub use wideroute_schema::{
        ddl::{parse_create_table, parse_statements},
        select::{TableSelector, parse_table_list},
    };
}
