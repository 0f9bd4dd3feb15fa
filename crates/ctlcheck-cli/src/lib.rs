//! CLI surface over `kripke-graph`, `ctl-formula`, `ctl-checker`, and
//! `actor-sim`. This crate holds no model-checking or scheduling logic of
//! its own — it treats `Graph`/`Formula`/`World` as opaque values handed
//! to it by the library crates, and is responsible only for argument
//! parsing, the stock scenario catalog, and presentation.

pub mod cli;
pub mod config;
pub mod scenarios;

pub use cli::{Cli, Commands, OutputFormat, ScenarioCommands};
pub use config::CliConfig;
