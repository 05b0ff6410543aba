//! ROI Projection - investment growth engine for periodic-contribution portfolios
//!
//! This library provides:
//! - Normalization of raw form/request fields ("10,000", "7%") into validated inputs
//! - Closed-form compound growth with periodic contributions, year by year
//! - A simple-interest baseline on the average invested balance for comparison
//! - Chart-ready parallel arrays of invested, compound and simple values
//! - Parallel batch projections over CSV scenario files

pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{FieldValue, Frequency, InputDefaults, ProjectionInputs, RawInputs, ValidationError};
pub use projection::{
    compute, ChartData, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionTotals,
    RoundingMode, SeriesPoint,
};
pub use scenario::{Scenario, ScenarioOutcome, ScenarioRunner};
