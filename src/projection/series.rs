//! Projection output: per-year series, totals and chart arrays

use crate::inputs::ProjectionInputs;
use serde::{Deserialize, Serialize};

/// One year of the projection, every value rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Elapsed whole years (0 = start)
    pub year: u32,
    /// Principal plus contributions made so far
    pub invested_so_far: f64,
    /// Balance with periodic compounding
    pub compound_value: f64,
    /// Balance under the simple-interest baseline
    pub simple_value: f64,
}

/// Summary figures at the end of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionTotals {
    pub total_future_value: f64,
    pub invested_capital: f64,
    /// `total_future_value - invested_capital`
    pub compound_interest: f64,
    pub simple_interest_equivalent_value: f64,
    /// `simple_interest_equivalent_value - invested_capital`
    pub simple_interest: f64,
}

/// Complete result of one projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub inputs: ProjectionInputs,
    pub totals: ProjectionTotals,
    /// Years 0..=inputs.years() in ascending order
    pub series: Vec<SeriesPoint>,
}

impl ProjectionResult {
    /// Parallel arrays in the shape chart libraries expect
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_series(&self.series)
    }

    /// Entry for `year`, if within the horizon
    pub fn point(&self, year: u32) -> Option<&SeriesPoint> {
        self.series.get(year as usize)
    }
}

/// `{categories, invested, compound, simple}` for direct chart consumption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Years as strings: "0", "1", ...
    pub categories: Vec<String>,
    pub invested: Vec<f64>,
    pub compound: Vec<f64>,
    pub simple: Vec<f64>,
}

impl ChartData {
    pub fn from_series(series: &[SeriesPoint]) -> Self {
        let mut chart = ChartData {
            categories: Vec::with_capacity(series.len()),
            invested: Vec::with_capacity(series.len()),
            compound: Vec::with_capacity(series.len()),
            simple: Vec::with_capacity(series.len()),
        };
        for point in series {
            chart.categories.push(point.year.to_string());
            chart.invested.push(point.invested_so_far);
            chart.compound.push(point.compound_value);
            chart.simple.push(point.simple_value);
        }
        chart
    }
}
