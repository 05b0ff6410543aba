//! Projection engine: compound growth against a simple-interest baseline

mod engine;
mod rounding;
mod series;

pub use engine::{
    compute, future_value_of_annuity, future_value_of_principal, ProjectionConfig,
    ProjectionEngine,
};
pub use rounding::RoundingMode;
pub use series::{ChartData, ProjectionResult, ProjectionTotals, SeriesPoint};
