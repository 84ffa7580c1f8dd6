//! Support power simulator binary.
//!
//! Replays scripted scenarios against the support power system and prints
//! what the powers did.
//!
//! # Examples
//!
//! ```bash
//! # Replay the demo scenario with the bundled catalog
//! cargo run -p powers-sim -- run crates/sim/scenarios/demo.ron
//!
//! # Same run, machine-readable, at a faster tick rate
//! cargo run -p powers-sim -- run crates/sim/scenarios/demo.ron --tick-rate 10 --json
//!
//! # List catalog definitions
//! cargo run -p powers-sim -- catalog
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser};
use powers_content::{ConfigLoader, ContentFactory, PowerCatalog, PowerLoader};
use powers_core::PowersConfig;
use powers_sim::{Scenario, SimConfig, Simulation, logging};

/// Support power simulator
#[derive(Parser)]
#[command(name = "powers-sim")]
#[command(about = "Headless support power simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a scenario and print the report
    Run(RunArgs),

    /// List power definitions with their charge times in ticks
    Catalog(CatalogArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Scenario RON file
    scenario: PathBuf,

    /// Power catalog RON file (default: bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulation config TOML file (default: bundled config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log filter directive, e.g. `debug` or `powers::manager=trace`
    #[arg(long)]
    log: Option<String>,
}

#[derive(Args)]
struct CatalogArgs {
    /// Power catalog RON file (default: bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for POWERS_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut env = SimConfig::from_env();

    match cli.command {
        Command::Run(args) => {
            if args.log.is_some() {
                env.log = args.log.clone();
            }
            logging::setup_logging(env.log.as_deref())?;
            run(args, env)
        }
        Command::Catalog(args) => {
            logging::setup_logging(env.log.as_deref())?;
            catalog(args, env)
        }
    }
}

fn run(args: RunArgs, mut env: SimConfig) -> Result<()> {
    if args.tick_rate.is_some() {
        env.ticks_per_second = args.tick_rate;
    }
    let catalog = load_catalog(args.catalog.as_deref(), &env)?;
    let config = load_config(args.config.as_deref(), &env)?;

    let scenario = Scenario::load(&args.scenario)?;
    let report = Simulation::new(scenario, catalog, &config)?.run()?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn catalog(args: CatalogArgs, mut env: SimConfig) -> Result<()> {
    if args.tick_rate.is_some() {
        env.ticks_per_second = args.tick_rate;
    }
    let catalog = load_catalog(args.catalog.as_deref(), &env)?;
    let config = load_config(None, &env)?;

    for info in catalog.iter() {
        let mut flags = Vec::new();
        if info.allow_multiple {
            flags.push("multiple");
        }
        if info.one_shot {
            flags.push("one-shot");
        }
        if info.targeting.is_some() {
            flags.push("targeted");
        }
        println!(
            "{:<16} {:>4}s {:>6} ticks  {}",
            info.order_name,
            info.charge_time,
            info.charge_ticks(config.ticks_per_second),
            flags.join(", ")
        );
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>, env: &SimConfig) -> Result<PowerCatalog> {
    match path.or(env.catalog.as_deref()) {
        Some(path) => PowerLoader::load(path),
        None => ContentFactory::bundled().load_powers(),
    }
}

fn load_config(path: Option<&Path>, env: &SimConfig) -> Result<PowersConfig> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ContentFactory::bundled().load_config()?,
    };
    let config = env.apply(config);
    config.validate()?;
    Ok(config)
}
