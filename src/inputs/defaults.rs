//! Default values substituted for missing or unparsable request fields

use super::Frequency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading an `InputDefaults` file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read defaults file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid defaults JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fallback values used when a request omits a field
///
/// `years` and `rate_percent` are also used when the submitted value cannot
/// be parsed at all. Defaults still pass through the normal validation, so a
/// bad defaults file surfaces as a `ValidationError` on first use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Projection horizon in years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Expected annual return in percent (7.0 = 7%)
    #[serde(default = "default_rate_percent")]
    pub rate_percent: f64,

    /// Initial principal
    #[serde(default = "default_initial")]
    pub initial: f64,

    /// Contribution made every period
    #[serde(default = "default_contribution")]
    pub contribution: f64,

    /// Contribution and compounding frequency (periods per year in JSON)
    #[serde(default = "default_frequency")]
    pub frequency: Frequency,
}

fn default_years() -> u32 { 10 }
fn default_rate_percent() -> f64 { 7.0 }
fn default_initial() -> f64 { 10_000.0 }
fn default_contribution() -> f64 { 1_000.0 }
fn default_frequency() -> Frequency { Frequency::Monthly }

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            years: 10,
            rate_percent: 7.0,
            initial: 10_000.0,
            contribution: 1_000.0,
            frequency: Frequency::Monthly,
        }
    }
}

impl InputDefaults {
    /// Parse defaults from a JSON document; absent keys keep their default
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load defaults from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let defaults = Self::from_json_str(&contents)?;
        log::debug!("loaded input defaults from {}: {:?}", path.display(), defaults);
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let defaults = InputDefaults::default();
        assert_eq!(defaults.years, 10);
        assert_eq!(defaults.rate_percent, 7.0);
        assert_eq!(defaults.initial, 10_000.0);
        assert_eq!(defaults.contribution, 1_000.0);
        assert_eq!(defaults.frequency, Frequency::Monthly);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let defaults = InputDefaults::from_json_str(r#"{"years": 30, "frequency": 26}"#).unwrap();
        assert_eq!(defaults.years, 30);
        assert_eq!(defaults.frequency, Frequency::Biweekly);
        assert_eq!(defaults.rate_percent, 7.0);
        assert_eq!(defaults.initial, 10_000.0);
    }

    #[test]
    fn test_empty_json_matches_default() {
        let defaults = InputDefaults::from_json_str("{}").unwrap();
        assert_eq!(defaults, InputDefaults::default());
    }

    #[test]
    fn test_invalid_frequency_in_json() {
        let err = InputDefaults::from_json_str(r#"{"frequency": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = InputDefaults::from_json_file("/nonexistent/roi_defaults.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
