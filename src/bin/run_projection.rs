//! Run a compound-growth projection and export the ledger CSV
//!
//! Accepts the same parameters as the web export endpoint and writes the
//! spreadsheet rows the export emitter consumes.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use referral_system::projection::{write_ledger, ProjectionEngine, ProjectionParams};
use std::fs::File;

#[derive(Parser)]
#[command(name = "run_projection")]
#[command(about = "Project compounding signal gains day by day")]
struct Cli {
    /// Starting capital
    #[arg(long, default_value = "1000")]
    invested: f64,

    /// One-time bonus added before day 1
    #[arg(long, default_value = "0")]
    first_reward: f64,

    /// Signals per day
    #[arg(long, default_value = "2")]
    signals: u32,

    /// Projection horizon in days
    #[arg(long, default_value = "30")]
    days: u32,

    /// First-time mode (2/5/2 signal schedule, five-column rows)
    #[arg(long)]
    first_time: bool,

    /// Seed for a reproducible run; omit for a fresh random draw
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, default_value = "projection_output.csv")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = ProjectionParams {
        invested: cli.invested,
        first_reward: cli.first_reward,
        signals_per_day: cli.signals,
        days: cli.days,
        first_time: cli.first_time,
    };

    let engine = ProjectionEngine::new(params);
    let result = match cli.seed {
        Some(seed) => engine.run_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => engine.run(),
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output))?;
    write_ledger(file, &result, Local::now().naive_local())
        .with_context(|| format!("failed to write {}", cli.output))?;

    let first = result.days.first();
    let last = result.days.last();
    println!("Ledger written to {}", cli.output);
    if let (Some(first), Some(last)) = (first, last) {
        println!(
            "  Day 1 start: {:.2}  Day {} end: {:.2}  ({} signal columns)",
            first.start_balance, last.day, last.end_balance, result.max_signal_columns
        );
    }

    Ok(())
}
