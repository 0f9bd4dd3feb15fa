//! Defaults for `--seed`, `--max-steps`, and `--format`, overridable by an
//! optional `./ctlcheck.toml` in the current directory. A single
//! project-level file, not a dual user/project lookup, since this
//! binary's whole surface is a thin convenience over the scenario
//! catalog, not a tool with a per-user profile to maintain.
//!
//! CLI flags always win over the config file, which always wins over the
//! built-in defaults below.

use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location the CLI looks for a config file, relative to the
/// current working directory.
pub const DEFAULT_CONFIG_PATH: &str = "ctlcheck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_max_steps() -> u64 {
    10_000
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            seed: 0,
            format: default_format(),
        }
    }
}

impl CliConfig {
    /// Loads `./ctlcheck.toml`, or the built-in defaults if it doesn't
    /// exist. A present-but-unparseable file is an error; an absent one
    /// is not.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
