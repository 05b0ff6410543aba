//! Projection inputs: raw request fields, normalization and validation

mod defaults;
mod error;
mod frequency;
mod params;
pub mod parse;

pub use defaults::{ConfigError, InputDefaults};
pub use error::{AmountField, ValidationError};
pub use frequency::Frequency;
pub use params::{FieldValue, ProjectionInputs, RawInputs};
pub use parse::{parse_money, parse_rate, parse_years};

// ============================================================================
// Input Bounds
// ============================================================================
// Years and rate above these limits are clamped, not rejected. The amount cap
// keeps the 100 year / 100% / weekly corner finite.

/// Longest supported projection horizon in years
pub const MAX_YEARS: u32 = 100;

/// Highest supported annual rate of return, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Largest accepted principal or contribution
pub const MAX_AMOUNT: f64 = 1e15;
