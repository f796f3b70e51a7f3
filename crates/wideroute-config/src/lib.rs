//! `wideroute.toml` loading.
//!
//! ```toml
//! [generate]
//! allow_filtering = true                  # emit filtered-scan patterns
//! max_regular_columns = 8                 # refuse wider tables when filtering
//! endpoint_root = "api/$keyspace/$table"  # route prefix template
//!
//! [input]
//! tables = ["app.events", "users"]        # [keyspace.]table, empty = all
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use wideroute_core::{DEFAULT_MAX_REGULAR_COLUMNS, visitor::EndpointRoot};

/// File name looked up when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "wideroute.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "WIDEROUTE_CONFIG";

/// Hard ceiling for `max_regular_columns`; beyond it a single anchor would
/// expand to more than sixteen million filtered patterns.
pub const REGULAR_COLUMNS_CEILING: usize = 24;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

///
/// WiderouteConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WiderouteConfig {
    pub generate: GenerateConfig,
    pub input: InputConfig,
}

impl WiderouteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Load `path` when given; otherwise fall back to `wideroute.toml` in
    /// the working directory if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let fallback = Path::new(CONFIG_FILE_NAME);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.generate.max_regular_columns;
        if max == 0 || max > REGULAR_COLUMNS_CEILING {
            return Err(ConfigError::Invalid {
                key: "generate.max_regular_columns",
                reason: format!("must be between 1 and {REGULAR_COLUMNS_CEILING}, got {max}"),
            });
        }

        if self.generate.endpoint_root.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                key: "generate.endpoint_root",
                reason: "must not contain whitespace".to_string(),
            });
        }

        Ok(())
    }
}

///
/// GenerateConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub allow_filtering: bool,
    pub max_regular_columns: usize,
    pub endpoint_root: String,
}

impl GenerateConfig {
    #[must_use]
    pub fn endpoint_root(&self) -> EndpointRoot {
        EndpointRoot::new(self.endpoint_root.clone())
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            allow_filtering: false,
            max_regular_columns: DEFAULT_MAX_REGULAR_COLUMNS,
            endpoint_root: EndpointRoot::DEFAULT.to_string(),
        }
    }
}

///
/// InputConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// `table` or `keyspace.table` entries; empty selects every table.
    pub tables: Vec<String>,
}
