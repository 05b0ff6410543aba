//! Parallel scenario execution and summary output

use super::{Scenario, ScenarioError};
use crate::inputs::{InputDefaults, ValidationError};
use crate::projection::{ProjectionEngine, ProjectionResult};
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Summary row for one scenario
///
/// Either the resolved inputs and totals are filled in, or `error` is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub years: Option<u32>,
    pub annual_rate_percent: Option<f64>,
    pub initial_principal: Option<f64>,
    pub periodic_contribution: Option<f64>,
    pub frequency: Option<u32>,
    pub total_future_value: Option<f64>,
    pub invested_capital: Option<f64>,
    pub compound_interest: Option<f64>,
    pub simple_interest_equivalent_value: Option<f64>,
    pub simple_interest: Option<f64>,
    pub error: Option<String>,
}

impl ScenarioOutcome {
    fn computed(name: &str, result: &ProjectionResult) -> Self {
        let inputs = &result.inputs;
        let totals = &result.totals;
        Self {
            name: name.to_string(),
            years: Some(inputs.years()),
            annual_rate_percent: Some(inputs.annual_rate_percent()),
            initial_principal: Some(inputs.initial_principal()),
            periodic_contribution: Some(inputs.periodic_contribution()),
            frequency: Some(inputs.frequency().periods_per_year()),
            total_future_value: Some(totals.total_future_value),
            invested_capital: Some(totals.invested_capital),
            compound_interest: Some(totals.compound_interest),
            simple_interest_equivalent_value: Some(totals.simple_interest_equivalent_value),
            simple_interest: Some(totals.simple_interest),
            error: None,
        }
    }

    fn rejected(name: &str, err: &ValidationError) -> Self {
        Self {
            name: name.to_string(),
            years: None,
            annual_rate_percent: None,
            initial_principal: None,
            periodic_contribution: None,
            frequency: None,
            total_future_value: None,
            invested_capital: None,
            compound_interest: None,
            simple_interest_equivalent_value: None,
            simple_interest: None,
            error: Some(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs scenarios through one engine with shared defaults
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    defaults: InputDefaults,
}

impl ScenarioRunner {
    pub fn new(engine: ProjectionEngine, defaults: InputDefaults) -> Self {
        Self { engine, defaults }
    }

    /// Resolve and project a single scenario
    ///
    /// A validation failure becomes an outcome carrying the error; it does
    /// not abort the batch.
    pub fn run_scenario(&self, scenario: &Scenario) -> ScenarioOutcome {
        match scenario.inputs.resolve(&self.defaults) {
            Ok(inputs) => {
                let result = self.engine.compute(&inputs);
                ScenarioOutcome::computed(&scenario.name, &result)
            }
            Err(err) => {
                warn!("scenario `{}` rejected: {}", scenario.name, err);
                ScenarioOutcome::rejected(&scenario.name, &err)
            }
        }
    }

    /// Project all scenarios in parallel; outcomes keep input order
    pub fn run(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| self.run_scenario(scenario))
            .collect()
    }
}

/// Write outcomes as CSV with a header row
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<(), ScenarioError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        wtr.serialize(outcome)?;
    }
    wtr.flush()?;
    Ok(())
}
