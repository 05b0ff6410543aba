//! Closed-form projection engine
//!
//! Each year is valued directly from the formulas, not by rolling the
//! previous year forward, so rounding never accumulates across the series.
//!
//! compound(i) = P(1+r)^n + C((1+r)^n - 1)/r,  n = f*i, r = rate/f
//! invested(i) = P + C*n
//! simple(i)   = invested(i) + (P + C*n/2) * rate * i

use super::{ProjectionResult, ProjectionTotals, RoundingMode, SeriesPoint};
use crate::inputs::ProjectionInputs;
use log::debug;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Rounding rule for every reported monetary value
    #[serde(default)]
    pub rounding: RoundingMode,
}

/// Stateless projection engine; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

/// Full-precision values for one year, before rounding
#[derive(Debug, Clone, Copy)]
struct YearValues {
    invested: f64,
    compound: f64,
    simple: f64,
}

impl YearValues {
    fn at(inputs: &ProjectionInputs, year: u32) -> Self {
        let principal = inputs.initial_principal();
        let contribution = inputs.periodic_contribution();
        let periodic_rate = inputs.periodic_rate();
        let periods = inputs.total_periods(year);
        let contributed = contribution * f64::from(periods);

        let invested = principal + contributed;
        let compound = future_value_of_principal(principal, periodic_rate, periods)
            + future_value_of_annuity(contribution, periodic_rate, periods);
        // Interest on the average balance held over the elapsed years
        let simple = invested + (principal + contributed / 2.0) * inputs.annual_rate() * f64::from(year);

        Self { invested, compound, simple }
    }
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project `inputs` over years 0..=years
    pub fn compute(&self, inputs: &ProjectionInputs) -> ProjectionResult {
        let series: Vec<SeriesPoint> = (0..=inputs.years())
            .map(|year| self.series_point(year, YearValues::at(inputs, year)))
            .collect();
        let totals = self.totals(YearValues::at(inputs, inputs.years()));

        debug!(
            "projected {} years at {}% {} on {:.2} + {:.2}/period: future value {:.2}",
            inputs.years(),
            inputs.annual_rate_percent(),
            inputs.frequency(),
            inputs.initial_principal(),
            inputs.periodic_contribution(),
            totals.total_future_value,
        );

        ProjectionResult {
            inputs: inputs.clone(),
            totals,
            series,
        }
    }

    fn series_point(&self, year: u32, values: YearValues) -> SeriesPoint {
        let cents = |v| self.config.rounding.to_cents(v);
        SeriesPoint {
            year,
            invested_so_far: cents(values.invested),
            compound_value: cents(values.compound),
            simple_value: cents(values.simple),
        }
    }

    fn totals(&self, at_horizon: YearValues) -> ProjectionTotals {
        let cents = |v| self.config.rounding.to_cents(v);
        let total_future_value = cents(at_horizon.compound);
        let invested_capital = cents(at_horizon.invested);
        let simple_interest_equivalent_value = cents(at_horizon.simple);

        ProjectionTotals {
            total_future_value,
            invested_capital,
            compound_interest: cents(total_future_value - invested_capital),
            simple_interest_equivalent_value,
            simple_interest: cents(simple_interest_equivalent_value - invested_capital),
        }
    }
}

/// Project with the default configuration
pub fn compute(inputs: &ProjectionInputs) -> ProjectionResult {
    ProjectionEngine::default().compute(inputs)
}

/// Future value of a lump sum after `periods` periods at `periodic_rate`
pub fn future_value_of_principal(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return principal;
    }
    principal * log_growth(periodic_rate, periods).exp()
}

/// Future value of `periods` end-of-period contributions at `periodic_rate`
///
/// At a zero rate the annuity factor `((1+r)^n - 1)/r` reduces to `n`.
pub fn future_value_of_annuity(contribution: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return contribution * f64::from(periods);
    }
    let growth_minus_one = log_growth(periodic_rate, periods).exp_m1();
    contribution * (growth_minus_one / periodic_rate)
}

/// `ln((1+r)^n)`, exact for rates too small to survive `1.0 + r`
fn log_growth(periodic_rate: f64, periods: u32) -> f64 {
    f64::from(periods) * periodic_rate.ln_1p()
}
