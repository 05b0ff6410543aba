//! Batch projections over many named scenarios

pub mod loader;
mod runner;

pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use runner::{write_outcomes, ScenarioOutcome, ScenarioRunner};

use crate::inputs::RawInputs;
use thiserror::Error;

/// One named set of raw inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: RawInputs,
}

/// Errors reading or writing scenario files
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
