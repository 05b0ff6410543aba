//! Run projections for every scenario in a CSV file
//!
//! Writes one summary row per scenario; rejected scenarios keep their row
//! with the validation error filled in.

use anyhow::{Context, Result};
use clap::Parser;
use roi_projection::scenario::{load_scenarios, write_outcomes};
use roi_projection::{InputDefaults, ProjectionConfig, ProjectionEngine, RoundingMode, ScenarioRunner};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_scenarios", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV: name,years,rate,initial,contribution,frequency
    #[arg(long)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// JSON file overriding the defaults for blank cells
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Cent rounding: half-away or half-even
    #[arg(long, default_value = "half-away")]
    rounding: RoundingMode,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let defaults = match &args.defaults {
        Some(path) => InputDefaults::from_json_file(path)
            .with_context(|| format!("loading defaults from {}", path.display()))?,
        None => InputDefaults::default(),
    };

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new(
        ProjectionEngine::new(ProjectionConfig { rounding: args.rounding }),
        defaults,
    );
    let proj_start = Instant::now();
    let outcomes = runner.run(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_outcomes(BufWriter::new(file), &outcomes)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Output written to {}", args.output.display());

    let rejected = outcomes.iter().filter(|o| !o.is_ok()).count();
    println!("\nBatch Summary:");
    println!("  Projected: {}", outcomes.len() - rejected);
    println!("  Rejected:  {}", rejected);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
