//! Scenario CSV loading
//!
//! Expected header: `name,years,rate,initial,contribution,frequency`.
//! Values are kept as raw text ("10,000", "7%") and normalized later, the
//! same way form fields are. Blank cells and missing columns fall back to
//! the runner's defaults.

use super::{Scenario, ScenarioError};
use crate::inputs::{FieldValue, RawInputs};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    years: Option<String>,
    #[serde(default)]
    rate: Option<String>,
    #[serde(default)]
    initial: Option<String>,
    #[serde(default)]
    contribution: Option<String>,
    #[serde(default)]
    frequency: Option<String>,
}

impl ScenarioRow {
    fn into_scenario(self, row_number: usize) -> Scenario {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("scenario-{}", row_number));

        Scenario {
            name,
            inputs: RawInputs {
                years: self.years.map(FieldValue::Text),
                rate: self.rate.map(FieldValue::Text),
                initial: self.initial.map(FieldValue::Text),
                contribution: self.contribution.map(FieldValue::Text),
                frequency: self.frequency.map(FieldValue::Text),
            },
        }
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (file, stdin, in-memory buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for (idx, record) in rdr.deserialize::<ScenarioRow>().enumerate() {
        let row = record?;
        scenarios.push(row.into_scenario(idx + 1));
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
