//! `ctlcheck` binary entry point.

use clap::Parser;
use ctl_checker::{holds, sat};
use ctlcheck_cli::cli::{Cli, Commands, OutputFormat, ScenarioCommands};
use ctlcheck_cli::config::CliConfig;
use ctlcheck_cli::scenarios::{graph_scenario, world_scenario, CATALOG};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FormulaRow {
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Holds")]
    holds: String,
    #[tabled(rename = "|Sat|")]
    sat_count: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = CliConfig::load()?;
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Scenario { command } => match command {
            ScenarioCommands::List => list_scenarios(format),
            ScenarioCommands::Check { name } => check_scenario(&name, format),
            ScenarioCommands::Run { name, seed, max_steps } => {
                let seed = seed.unwrap_or(config.seed);
                let max_steps = max_steps.unwrap_or(config.max_steps);
                run_scenario(&name, seed, max_steps, format)
            }
        },
    }
}

fn list_scenarios(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let names: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Text => {
            for s in CATALOG {
                println!("{:<20} {}", s.name, s.description);
            }
        }
    }
    Ok(())
}

fn check_scenario(name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let (graph, battery) = graph_scenario(name)
        .ok_or_else(|| anyhow::anyhow!("unknown or non-graph scenario: {name}"))?;

    let mut rows = Vec::new();
    for (label, formula) in &battery {
        let satisfied = sat(&graph, formula)?;
        let does_hold = holds(&graph, formula)?;
        rows.push(FormulaRow {
            formula: label.to_string(),
            holds: does_hold.to_string(),
            sat_count: satisfied.count(),
        });
    }

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = rows
                .iter()
                .map(|r| serde_json::json!({"formula": r.formula, "holds": r.holds, "sat_count": r.sat_count}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("{}", Table::new(rows));
        }
    }
    Ok(())
}

fn run_scenario(name: &str, seed: u64, max_steps: u64, format: OutputFormat) -> anyhow::Result<()> {
    let mut world = world_scenario(name, seed)
        .ok_or_else(|| anyhow::anyhow!("unknown or non-actor scenario: {name}"))?;

    let outcome = actor_sim::run(&mut world, max_steps);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "outcome": format!("{:?}", outcome),
                    "events": world.events(),
                })
            );
        }
        OutputFormat::Text => {
            println!("outcome: {:?}", outcome);
            for event in world.events() {
                println!(
                    "  t={:<4} {} -> {} (delay {})",
                    event.time, event.from, event.to, event.queue_delay()
                );
            }
        }
    }
    Ok(())
}
