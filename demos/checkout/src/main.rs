//! checkout — compare station line-ups on one day of customers.
//!
//! Loads a scenario file (or generates a seeded random one), prints the
//! customer statistics, then simulates the day once per station preset and
//! reports the per-station results to the terminal and to CSV.
//!
//! ```text
//! checkout --customers 250 --avg-items 8 --seed 42
//! checkout --scenario saturday.json --preset mixed --preset custom
//! RUST_LOG=ck_sim=debug checkout
//! ```

mod presets;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ck_core::{SimConfig, SimTime};
use ck_output::{CsvReport, CustomerStats, ReportObserver, TextReport, write_customer_stats};
use ck_scenario::{
    Scenario, ScenarioGenerator, load_scenario_json, sample_catalogue, save_scenario_json,
};
use ck_sim::{ShortestExpectedWait, SupermarketBuilder};
use ck_station::DEFAULT_MAX_PRIORITY_ITEMS;

use presets::Preset;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "checkout")]
#[command(about = "Checkout floor simulator: compare FIFO and priority stations", long_about = None)]
struct Cli {
    /// Scenario JSON file; a random scenario is generated when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of generated customers
    #[arg(long, default_value_t = 250)]
    customers: usize,

    /// Average basket size of generated customers
    #[arg(long, default_value_t = 8)]
    avg_items: u32,

    /// Seed for the customer generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Opening time of a generated scenario (HH:MM[:SS])
    #[arg(long, default_value = "08:00")]
    open: SimTime,

    /// Closing time of a generated scenario (HH:MM[:SS])
    #[arg(long, default_value = "20:00")]
    close: SimTime,

    /// Station line-ups to simulate (repeatable); all four when omitted
    #[arg(short, long, value_enum)]
    preset: Vec<Preset>,

    /// Item count up to which a customer counts as a short basket
    #[arg(long, default_value_t = DEFAULT_MAX_PRIORITY_ITEMS)]
    max_priority_items: u32,

    /// Also write the simulated scenario to this JSON file
    #[arg(long)]
    save_scenario: Option<PathBuf>,

    /// Directory for the CSV reports
    #[arg(short, long, default_value = "output/checkout")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn scenario_from(cli: &Cli) -> Result<Scenario> {
    if let Some(path) = &cli.scenario {
        return load_scenario_json(path)
            .with_context(|| format!("loading scenario {}", path.display()));
    }

    let config = SimConfig::new(cli.open, cli.close);
    let name = format!("random-{}x{}-seed{}", cli.customers, cli.avg_items, cli.seed);
    let mut scenario = Scenario::new(name, config).with_products(sample_catalogue());
    ScenarioGenerator::seeded(cli.seed)
        .add_random_customers(&mut scenario, cli.customers, cli.avg_items)
        .context("generating customers")?;
    info!(customers = scenario.customers.len(), seed = cli.seed, "scenario generated");
    Ok(scenario)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 1. Input.
    let scenario = scenario_from(&cli)?;
    if let Some(path) = &cli.save_scenario {
        save_scenario_json(&scenario, path)
            .with_context(|| format!("saving scenario {}", path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    let stats = CustomerStats::from_customers(&scenario.customers);
    write_customer_stats(&mut stdout, &scenario.name, &scenario.config, &scenario.products, &stats)?;
    drop(stdout);

    // 2. Output: CSV files plus the terminal table.
    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let writer = (CsvReport::new(&cli.output)?, TextReport::new(io::stdout()));
    let mut obs = ReportObserver::new(writer);

    // 3. One simulated day per preset.
    let presets = if cli.preset.is_empty() { Preset::ALL.to_vec() } else { cli.preset.clone() };
    for preset in presets {
        let mut market = SupermarketBuilder::new(scenario.config, ShortestExpectedWait)
            .stations(preset.stations(cli.max_priority_items))
            .build()?;

        obs.begin_run(preset.label());
        let t0 = Instant::now();
        market
            .simulate(&scenario.customers, &mut obs)
            .with_context(|| format!("simulating preset {}", preset.label()))?;
        info!(
            preset = preset.label(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "run complete"
        );
    }

    obs.finish().context("writing reports")?;
    println!("\nCSV reports written to {}", cli.output.display());
    Ok(())
}
