//! Validation errors raised while normalizing projection inputs

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which money field an `InvalidAmount` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AmountField {
    InitialPrincipal,
    PeriodicContribution,
}

impl AmountField {
    /// Request field name, as submitted by callers
    pub fn name(self) -> &'static str {
        match self {
            AmountField::InitialPrincipal => "initial",
            AmountField::PeriodicContribution => "contribution",
        }
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input rejected before any computation takes place
///
/// Every variant carries the offending value as submitted so the caller can
/// echo it back when re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("years `{value}` rejected: {reason}")]
    InvalidYears { value: String, reason: &'static str },

    #[error("rate `{value}` rejected: {reason}")]
    InvalidRate { value: String, reason: &'static str },

    #[error("{field} `{value}` rejected: {reason}")]
    InvalidAmount {
        field: AmountField,
        value: String,
        reason: &'static str,
    },

    #[error("frequency `{value}` rejected: expected one of 1, 12, 26, 52")]
    InvalidFrequency { value: String },
}

impl ValidationError {
    /// Name of the request field that failed
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidYears { .. } => "years",
            ValidationError::InvalidRate { .. } => "rate",
            ValidationError::InvalidAmount { field, .. } => field.name(),
            ValidationError::InvalidFrequency { .. } => "frequency",
        }
    }

    /// Stable error kind for structured responses
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidYears { .. } => "InvalidYears",
            ValidationError::InvalidRate { .. } => "InvalidRate",
            ValidationError::InvalidAmount { .. } => "InvalidAmount",
            ValidationError::InvalidFrequency { .. } => "InvalidFrequency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_error_names_field() {
        let err = ValidationError::InvalidAmount {
            field: AmountField::PeriodicContribution,
            value: "-50".to_string(),
            reason: "must not be negative",
        };

        assert_eq!(err.field(), "contribution");
        assert_eq!(err.kind(), "InvalidAmount");
        assert_eq!(err.to_string(), "contribution `-50` rejected: must not be negative");
    }

    #[test]
    fn test_frequency_error_message() {
        let err = ValidationError::InvalidFrequency { value: "4".to_string() };
        assert_eq!(err.field(), "frequency");
        assert!(err.to_string().contains("1, 12, 26, 52"));
    }
}
