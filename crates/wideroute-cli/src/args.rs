//! CLI argument definitions for wideroute.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wideroute::config::CONFIG_ENV_VAR;

/// Access-pattern enumeration for wide-column table schemas.
///
/// Reads CQL `CREATE TABLE` statements and prints, per table, every legal
/// query shape with its method id and route. Values are layered: flags
/// override the config file, which overrides built-in defaults.
///
/// ## Examples
///
///   wideroute schema.cql
///   wideroute --allow-filtering --tables app.events --format json schema.cql
#[derive(Parser, Debug)]
#[command(name = "wideroute")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CQL file holding one or more `;`-terminated statements
    pub ddl_file: PathBuf,

    /// Config file (defaults to ./wideroute.toml when present)
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Emit filtered-scan patterns over regular columns
    #[arg(long, overrides_with = "no_allow_filtering")]
    pub allow_filtering: bool,

    /// Never emit filtered-scan patterns
    #[arg(long, overrides_with = "allow_filtering")]
    pub no_allow_filtering: bool,

    /// Comma-separated `table` or `keyspace.table` list; unquoted names are
    /// lower-cased, "quoted" names keep their case. Default is every table
    #[arg(short = 't', long)]
    pub tables: Option<String>,

    /// Route prefix template, e.g. "api/$keyspace/$table"
    #[arg(long)]
    pub endpoint_root: Option<String>,

    /// Refuse tables with more regular columns than this when filtering
    /// (1 to 24, default 16)
    #[arg(long)]
    pub max_regular_columns: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Tri-state filtering flag: `None` defers to the config file.
    pub const fn allow_filtering_override(&self) -> Option<bool> {
        if self.allow_filtering {
            Some(true)
        } else if self.no_allow_filtering {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_file_is_required() {
        assert!(Cli::try_parse_from(["wideroute"]).is_err());
    }

    #[test]
    fn defaults_defer_to_config() {
        let cli = Cli::try_parse_from(["wideroute", "schema.cql"]).expect("parse");

        assert_eq!(cli.ddl_file, PathBuf::from("schema.cql"));
        assert_eq!(cli.allow_filtering_override(), None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.tables.is_none());
    }

    #[test]
    fn last_filtering_flag_wins() {
        let cli = Cli::try_parse_from([
            "wideroute",
            "--allow-filtering",
            "--no-allow-filtering",
            "schema.cql",
        ])
        .expect("parse");

        assert_eq!(cli.allow_filtering_override(), Some(false));

        let cli = Cli::try_parse_from(["wideroute", "--allow-filtering", "schema.cql"])
            .expect("parse");
        assert_eq!(cli.allow_filtering_override(), Some(true));
    }

    #[test]
    fn accepts_every_override() {
        let cli = Cli::try_parse_from([
            "wideroute",
            "--tables",
            "app.events,app.users",
            "--endpoint-root",
            "v1/$table",
            "--max-regular-columns",
            "4",
            "--format",
            "json",
            "schema.cql",
        ])
        .expect("parse");

        assert_eq!(cli.tables.as_deref(), Some("app.events,app.users"));
        assert_eq!(cli.endpoint_root.as_deref(), Some("v1/$table"));
        assert_eq!(cli.max_regular_columns, Some(4));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
