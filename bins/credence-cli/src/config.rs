//! CLI configuration.
//!
//! [`CliConfig`] is layered, lowest precedence first:
//! built-in defaults, the TOML config file, `CREDENCE_*` environment
//! variables, then explicit command-line flags (applied by the caller).

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Report output format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a CLI invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level filter string (e.g. "info", "debug", "credence_score=trace").
    pub log_level: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// `<config_dir>/credence/credence.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("credence").join("credence.toml"))
    }

    /// Load configuration from `path` (required to exist) or, when `None`,
    /// from the default path if present, then overlay `CREDENCE_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), but `env` replaces the process environment
    /// as the source of `CREDENCE_*` variables when given.
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(config::File::from(default).required(false));
                }
            }
        }

        builder
            .add_source(config::Environment::with_prefix("CREDENCE").source(env))
            .build()?
            .try_deserialize()
    }
}
