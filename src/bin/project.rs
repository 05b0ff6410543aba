//! Project investment growth for one set of inputs
//!
//! Prints the year-by-year breakdown as a table, JSON, CSV or chart arrays.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roi_projection::{
    FieldValue, InputDefaults, ProjectionConfig, ProjectionEngine, ProjectionResult, RawInputs,
    RoundingMode,
};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
    Chart,
}

#[derive(Debug, Parser)]
#[command(name = "project", about = "Project compound vs simple growth of an investment")]
struct Args {
    /// Years to invest for (1-100)
    #[arg(long, allow_hyphen_values = true)]
    years: Option<String>,

    /// Expected annual rate of return in percent, e.g. 7 or "7.5%"
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Initial principal, e.g. "10,000"
    #[arg(long, allow_hyphen_values = true)]
    initial: Option<String>,

    /// Contribution made every period, e.g. "1,000"
    #[arg(long, allow_hyphen_values = true)]
    contribution: Option<String>,

    /// Periods per year: 1, 12, 26, 52 (or annual, monthly, biweekly, weekly)
    #[arg(long)]
    frequency: Option<String>,

    /// JSON file overriding the defaults for omitted fields
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Cent rounding: half-away or half-even
    #[arg(long, default_value = "half-away")]
    rounding: RoundingMode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let defaults = match &args.defaults {
        Some(path) => InputDefaults::from_json_file(path)
            .with_context(|| format!("loading defaults from {}", path.display()))?,
        None => InputDefaults::default(),
    };

    let raw = RawInputs {
        years: args.years.map(FieldValue::Text),
        rate: args.rate.map(FieldValue::Text),
        initial: args.initial.map(FieldValue::Text),
        contribution: args.contribution.map(FieldValue::Text),
        frequency: args.frequency.map(FieldValue::Text),
    };
    let inputs = raw.resolve(&defaults).context("invalid projection inputs")?;

    let engine = ProjectionEngine::new(ProjectionConfig { rounding: args.rounding });
    let result = engine.compute(&inputs);

    match args.format {
        OutputFormat::Table => print_table(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            for point in &result.series {
                wtr.serialize(point)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Chart => println!("{}", serde_json::to_string(&result.chart_data())?),
    }

    Ok(())
}

fn print_table(result: &ProjectionResult) {
    let inputs = &result.inputs;
    let totals = &result.totals;

    println!(
        "{} years at {}% ({}), initial ${:.2}, contribution ${:.2} per period",
        inputs.years(),
        inputs.annual_rate_percent(),
        inputs.frequency(),
        inputs.initial_principal(),
        inputs.periodic_contribution(),
    );
    println!();
    println!("{:>5} | {:>16} | {:>16} | {:>16}", "Year", "Invested", "Compound", "Simple");
    for point in &result.series {
        println!(
            "{:>5} | {:>16.2} | {:>16.2} | {:>16.2}",
            point.year, point.invested_so_far, point.compound_value, point.simple_value
        );
    }

    println!("\nSummary:");
    println!("  Total future value:     ${:.2}", totals.total_future_value);
    println!("  Invested capital:       ${:.2}", totals.invested_capital);
    println!("  Compound interest:      ${:.2}", totals.compound_interest);
    println!("  Simple interest value:  ${:.2}", totals.simple_interest_equivalent_value);
    println!("  Simple interest:        ${:.2}", totals.simple_interest);
}
