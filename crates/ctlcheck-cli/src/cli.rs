//! Argument parsing: the `ctlcheck` surface is deliberately thin —
//! `scenario list|check|run` plus global `--format`/`--verbose`. This is
//! not a general model-checker front end, only a way to exercise the
//! built-in scenarios.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "ctlcheck")]
#[command(about = "CTL model checker and actor scheduler demo CLI", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Output format: text or json. Overrides `./ctlcheck.toml` if given;
    /// falls back to the config file's default, then `text`, if not.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (trace-level instrumentation from
    /// `ctl-checker` and `actor-sim`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid output format: {}", s)),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scenario catalog and evaluation commands.
    Scenario {
        #[command(subcommand)]
        command: ScenarioCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// List the built-in scenarios.
    List,
    /// Build a named scenario's Kripke graph and evaluate its stock CTL
    /// formula battery at the initial state.
    Check {
        /// Scenario name, as printed by `scenario list`.
        name: String,
    },
    /// Drive a named actor scenario's scheduler to a terminal outcome.
    Run {
        /// Scenario name, as printed by `scenario list`.
        name: String,
        /// PRNG seed for reproducible step selection. Overrides
        /// `./ctlcheck.toml`'s `seed` if given.
        #[arg(long)]
        seed: Option<u64>,
        /// Step budget before the run is reported as `MaxSteps`.
        /// Overrides `./ctlcheck.toml`'s `max_steps` if given.
        #[arg(long)]
        max_steps: Option<u64>,
    },
}
