//! Execution logic for the wideroute binary.

use crate::{
    args::{Cli, OutputFormat},
    output::render_text,
};
use anyhow::{Context, Result};
use std::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use wideroute::{
    config::WiderouteConfig,
    plan::{PlanOptions, TablePlan, plan_ddl},
    schema::select::parse_table_list,
};

/// Initialize logging from `RUST_LOG` (default `warn`).
///
/// Logs are written to stderr so stdout remains clean for program output.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialise logging: {err}"))
}

/// Layer flags over the config file over defaults.
///
/// Flags are folded into the config before validation, so they are held to
/// the same bounds as file values.
pub fn resolve_options(cli: &Cli) -> Result<PlanOptions> {
    let mut config = WiderouteConfig::load_or_default(cli.config.as_deref())?;

    let generate = &mut config.generate;
    if let Some(allow) = cli.allow_filtering_override() {
        generate.allow_filtering = allow;
    }
    if let Some(max) = cli.max_regular_columns {
        generate.max_regular_columns = max;
    }
    if let Some(root) = &cli.endpoint_root {
        generate.endpoint_root.clone_from(root);
    }

    let mut options = PlanOptions::from_config(&config)?;
    if let Some(list) = &cli.tables {
        options.tables = parse_table_list(list)?;
    }

    Ok(options)
}

/// Plan every selected table in the DDL file.
pub fn execute(cli: &Cli) -> Result<Vec<TablePlan>> {
    let options = resolve_options(cli)?;
    let ddl = fs::read_to_string(&cli.ddl_file)
        .with_context(|| format!("failed to read DDL file '{}'", cli.ddl_file.display()))?;

    let plans = plan_ddl(&ddl, &options)?;
    info!(
        tables = plans.len(),
        patterns = plans.iter().map(|p| p.catalog.len()).sum::<usize>(),
        allow_filtering = options.enumerate.allow_filtering,
        "planned"
    );

    Ok(plans)
}

/// Render plans in the requested format.
pub fn render(plans: &[TablePlan], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(plans)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(plans).context("failed to serialise plans as JSON")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::{ffi::OsStr, path::PathBuf};

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wideroute-cli-{}-{name}",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    const DDL: &str = "CREATE TABLE app.events (user_id int, ts timestamp, status text, \
                       PRIMARY KEY (user_id, ts));";

    #[test]
    fn flags_override_config_file() {
        let config = write_temp(
            "override.toml",
            "[generate]\nallow_filtering = true\nendpoint_root = \"cfg/$table\"\n",
        );
        let cli = Cli::try_parse_from([
            OsStr::new("wideroute"),
            OsStr::new("--config"),
            config.as_os_str(),
            OsStr::new("--no-allow-filtering"),
            OsStr::new("schema.cql"),
        ])
        .expect("parse");

        let options = resolve_options(&cli).expect("options");
        let _ = fs::remove_file(&config);

        assert!(!options.enumerate.allow_filtering);
        assert_eq!(options.endpoint_root.template(), "cfg/$table");
    }

    #[test]
    fn executes_and_renders_json() {
        let ddl = write_temp("events.cql", DDL);
        let cli = Cli::try_parse_from([
            OsStr::new("wideroute"),
            OsStr::new("--allow-filtering"),
            ddl.as_os_str(),
        ])
        .expect("parse");

        let plans = execute(&cli).expect("execute");
        let json = render(&plans, OutputFormat::Json).expect("render");
        let _ = fs::remove_file(&ddl);

        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["catalog"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn missing_ddl_file_is_reported() {
        let cli = Cli::try_parse_from(["wideroute", "/nonexistent/wideroute/schema.cql"])
            .expect("parse");

        let err = execute(&cli).expect_err("missing file");
        assert!(err.to_string().contains("failed to read DDL file"));
    }

    #[test]
    fn bad_table_list_flag_is_rejected() {
        let cli = Cli::try_parse_from(["wideroute", "--tables", "a.b.c", "schema.cql"])
            .expect("parse");

        assert!(resolve_options(&cli).is_err());
    }

    #[test]
    fn bare_table_flag_is_accepted() {
        let cli = Cli::try_parse_from(["wideroute", "--tables", "Events", "schema.cql"])
            .expect("parse");

        let options = resolve_options(&cli).expect("options");
        assert_eq!(options.tables, parse_table_list("events").expect("list"));
    }

    #[test]
    fn max_regular_columns_flag_is_validated() {
        for bad in ["0", "1000"] {
            let cli = Cli::try_parse_from([
                "wideroute",
                "--max-regular-columns",
                bad,
                "schema.cql",
            ])
            .expect("parse");

            let err = resolve_options(&cli).expect_err("out of range");
            assert!(
                format!("{err:#}").contains("generate.max_regular_columns"),
                "{err:#}"
            );
        }

        let cli = Cli::try_parse_from(["wideroute", "--max-regular-columns", "24", "schema.cql"])
            .expect("parse");
        let options = resolve_options(&cli).expect("options");
        assert_eq!(options.enumerate.max_regular_columns, 24);
    }

    #[test]
    fn endpoint_root_flag_is_validated() {
        let cli = Cli::try_parse_from(["wideroute", "--endpoint-root", "api /$table", "schema.cql"])
            .expect("parse");

        assert!(resolve_options(&cli).is_err());
    }
}
