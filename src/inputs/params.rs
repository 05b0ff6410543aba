//! Raw request fields and the validated inputs the engine consumes

use super::parse::{parse_money, parse_rate, parse_years};
use super::{AmountField, Frequency, InputDefaults, ValidationError};
use super::{MAX_AMOUNT, MAX_RATE_PERCENT, MAX_YEARS};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single request field, either already numeric or as typed into a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Blank text counts as not submitted
    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

/// Unvalidated projection request
///
/// Every field is optional; `resolve` fills gaps from `InputDefaults`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub years: Option<FieldValue>,
    pub rate: Option<FieldValue>,
    pub initial: Option<FieldValue>,
    pub contribution: Option<FieldValue>,
    pub frequency: Option<FieldValue>,
}

impl RawInputs {
    /// Take each field from `self`, falling back to `other` where absent
    pub fn with_fallback(self, other: RawInputs) -> RawInputs {
        RawInputs {
            years: submitted(self.years).or(other.years),
            rate: submitted(self.rate).or(other.rate),
            initial: submitted(self.initial).or(other.initial),
            contribution: submitted(self.contribution).or(other.contribution),
            frequency: submitted(self.frequency).or(other.frequency),
        }
    }

    /// Normalize and validate into `ProjectionInputs`
    ///
    /// Fields are checked in order (years, rate, initial, contribution,
    /// frequency) and the first failure is returned.
    pub fn resolve(&self, defaults: &InputDefaults) -> Result<ProjectionInputs, ValidationError> {
        let years = match present(&self.years) {
            None => i64::from(defaults.years),
            Some(FieldValue::Number(n)) if n.is_finite() => n.trunc() as i64,
            Some(value) => {
                let text = value.to_string();
                parse_years(&text).unwrap_or_else(|| {
                    debug!("years `{}` is not numeric, using default {}", text, defaults.years);
                    i64::from(defaults.years)
                })
            }
        };
        let years = checked_years(years)?;

        let rate = match present(&self.rate) {
            None => defaults.rate_percent,
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(text)) => parse_rate(text).unwrap_or_else(|| {
                debug!("rate `{}` is not numeric, using default {}", text, defaults.rate_percent);
                defaults.rate_percent
            }),
        };
        let annual_rate_percent = checked_rate(rate)?;

        let initial_principal = resolve_amount(
            present(&self.initial),
            AmountField::InitialPrincipal,
            defaults.initial,
        )?;
        let periodic_contribution = resolve_amount(
            present(&self.contribution),
            AmountField::PeriodicContribution,
            defaults.contribution,
        )?;

        let frequency = match present(&self.frequency) {
            None => defaults.frequency,
            Some(FieldValue::Number(n)) => frequency_from_number(*n)?,
            Some(FieldValue::Text(text)) => text.parse::<Frequency>()?,
        };

        Ok(ProjectionInputs {
            years,
            annual_rate_percent,
            initial_principal,
            periodic_contribution,
            frequency,
        })
    }
}

/// Validated, immutable inputs for one projection
///
/// Construction goes through `ProjectionInputs::new` or `RawInputs::resolve`,
/// so every instance is within bounds: 1..=100 years, 0..=100 percent,
/// finite non-negative amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    years: u32,
    annual_rate_percent: f64,
    initial_principal: f64,
    periodic_contribution: f64,
    frequency: Frequency,
}

impl ProjectionInputs {
    /// Validate numeric inputs
    ///
    /// Years above 100 and rates outside [0, 100] are clamped rather than
    /// rejected. Zero years, non-finite rates and negative or non-finite
    /// amounts are errors.
    pub fn new(
        years: u32,
        annual_rate_percent: f64,
        initial_principal: f64,
        periodic_contribution: f64,
        frequency: Frequency,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            years: checked_years(i64::from(years))?,
            annual_rate_percent: checked_rate(annual_rate_percent)?,
            initial_principal: checked_amount(AmountField::InitialPrincipal, initial_principal)?,
            periodic_contribution: checked_amount(
                AmountField::PeriodicContribution,
                periodic_contribution,
            )?,
            frequency,
        })
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    /// Annual rate in percent (7.0 = 7%)
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    /// Annual rate as a fraction (0.07 = 7%)
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0
    }

    pub fn initial_principal(&self) -> f64 {
        self.initial_principal
    }

    pub fn periodic_contribution(&self) -> f64 {
        self.periodic_contribution
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Rate applied each period: annual rate / periods per year
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate() / f64::from(self.frequency.periods_per_year())
    }

    /// Number of contribution periods elapsed by the end of `year`
    pub fn total_periods(&self, year: u32) -> u32 {
        self.frequency.periods_per_year() * year
    }
}

fn present(value: &Option<FieldValue>) -> Option<&FieldValue> {
    value.as_ref().filter(|v| !v.is_blank())
}

fn submitted(value: Option<FieldValue>) -> Option<FieldValue> {
    value.filter(|v| !v.is_blank())
}

fn resolve_amount(
    value: Option<&FieldValue>,
    field: AmountField,
    default: f64,
) -> Result<f64, ValidationError> {
    let amount = match value {
        None => default,
        Some(FieldValue::Number(n)) => *n,
        Some(FieldValue::Text(text)) => {
            parse_money(text).ok_or_else(|| ValidationError::InvalidAmount {
                field,
                value: text.clone(),
                reason: "not a number",
            })?
        }
    };
    checked_amount(field, amount)
}

fn frequency_from_number(n: f64) -> Result<Frequency, ValidationError> {
    let invalid = || ValidationError::InvalidFrequency { value: n.to_string() };
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Frequency::from_periods(n as u32).ok_or_else(invalid)
}

fn checked_years(years: i64) -> Result<u32, ValidationError> {
    if years < 1 {
        return Err(ValidationError::InvalidYears {
            value: years.to_string(),
            reason: "must be at least 1",
        });
    }
    if years > i64::from(MAX_YEARS) {
        warn!("years {} above maximum, clamped to {}", years, MAX_YEARS);
        return Ok(MAX_YEARS);
    }
    Ok(years as u32)
}

fn checked_rate(rate: f64) -> Result<f64, ValidationError> {
    if !rate.is_finite() {
        return Err(ValidationError::InvalidRate {
            value: rate.to_string(),
            reason: "must be a finite number",
        });
    }
    if rate > MAX_RATE_PERCENT {
        warn!("rate {}% above maximum, clamped to {}%", rate, MAX_RATE_PERCENT);
        return Ok(MAX_RATE_PERCENT);
    }
    if rate < 0.0 {
        warn!("rate {}% below zero, clamped to 0%", rate);
        return Ok(0.0);
    }
    Ok(rate)
}

fn checked_amount(field: AmountField, amount: f64) -> Result<f64, ValidationError> {
    let reason = if !amount.is_finite() {
        "must be a finite number"
    } else if amount < 0.0 {
        "must not be negative"
    } else if amount > MAX_AMOUNT {
        "exceeds the maximum of 1e15"
    } else {
        return Ok(amount);
    };
    Err(ValidationError::InvalidAmount {
        field,
        value: amount.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_inputs(years: &str, rate: &str, initial: &str, contribution: &str, frequency: &str) -> RawInputs {
        RawInputs {
            years: Some(years.into()),
            rate: Some(rate.into()),
            initial: Some(initial.into()),
            contribution: Some(contribution.into()),
            frequency: Some(frequency.into()),
        }
    }

    #[test]
    fn test_resolve_decorated_strings() {
        let raw = text_inputs("10", "7%", "10,000", "$1,000", "12");
        let inputs = raw.resolve(&InputDefaults::default()).unwrap();

        assert_eq!(inputs.years(), 10);
        assert_eq!(inputs.annual_rate_percent(), 7.0);
        assert_eq!(inputs.initial_principal(), 10_000.0);
        assert_eq!(inputs.periodic_contribution(), 1_000.0);
        assert_eq!(inputs.frequency(), Frequency::Monthly);
        assert!((inputs.periodic_rate() - 0.07 / 12.0).abs() < 1e-15);
        assert_eq!(inputs.total_periods(10), 120);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let inputs = RawInputs::default().resolve(&InputDefaults::default()).unwrap();
        let expected = ProjectionInputs::new(10, 7.0, 10_000.0, 1_000.0, Frequency::Monthly).unwrap();
        assert_eq!(inputs, expected);
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let raw = text_inputs("", "  ", "", "", "");
        let inputs = raw.resolve(&InputDefaults::default()).unwrap();
        assert_eq!(inputs.years(), 10);
        assert_eq!(inputs.initial_principal(), 10_000.0);
    }

    #[test]
    fn test_non_numeric_years_and_rate_fall_back() {
        let raw = text_inputs("ten", "lots", "5000", "0", "1");
        let inputs = raw.resolve(&InputDefaults::default()).unwrap();
        assert_eq!(inputs.years(), 10);
        assert_eq!(inputs.annual_rate_percent(), 7.0);
    }

    #[test]
    fn test_years_clamped_at_100() {
        let at_limit = ProjectionInputs::new(100, 7.0, 0.0, 0.0, Frequency::Annual).unwrap();
        assert_eq!(at_limit.years(), 100);

        let over = ProjectionInputs::new(101, 7.0, 0.0, 0.0, Frequency::Annual).unwrap();
        assert_eq!(over.years(), 100);

        let raw = text_inputs("1,000", "7", "0", "0", "1");
        assert_eq!(raw.resolve(&InputDefaults::default()).unwrap().years(), 100);
    }

    #[test]
    fn test_zero_or_negative_years_rejected() {
        let err = ProjectionInputs::new(0, 7.0, 0.0, 0.0, Frequency::Annual).unwrap_err();
        assert_eq!(err.kind(), "InvalidYears");

        let raw = text_inputs("-5", "7", "0", "0", "1");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidYears { ref value, .. } if value == "-5"));
    }

    #[test]
    fn test_fractional_years_truncate() {
        let raw = RawInputs {
            years: Some(FieldValue::Number(12.9)),
            ..Default::default()
        };
        assert_eq!(raw.resolve(&InputDefaults::default()).unwrap().years(), 12);
    }

    #[test]
    fn test_rate_clamped_to_range() {
        let high = ProjectionInputs::new(5, 101.0, 0.0, 0.0, Frequency::Annual).unwrap();
        assert_eq!(high.annual_rate_percent(), 100.0);

        let low = ProjectionInputs::new(5, -3.0, 0.0, 0.0, Frequency::Annual).unwrap();
        assert_eq!(low.annual_rate_percent(), 0.0);

        let exact = ProjectionInputs::new(5, 100.0, 0.0, 0.0, Frequency::Annual).unwrap();
        assert_eq!(exact.annual_rate_percent(), 100.0);
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let err = ProjectionInputs::new(5, f64::NAN, 0.0, 0.0, Frequency::Annual).unwrap_err();
        assert_eq!(err.kind(), "InvalidRate");

        let raw = text_inputs("5", "inf", "0", "0", "1");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert_eq!(err.field(), "rate");
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let err = ProjectionInputs::new(5, 7.0, -1.0, 0.0, Frequency::Annual).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAmount {
                field: AmountField::InitialPrincipal,
                value: "-1".to_string(),
                reason: "must not be negative",
            }
        );

        let raw = text_inputs("5", "7", "1,000", "-100", "12");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert_eq!(err.field(), "contribution");
    }

    #[test]
    fn test_unparsable_amount_rejected() {
        let raw = text_inputs("5", "7", "lots", "100", "12");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAmount { field: AmountField::InitialPrincipal, ref value, .. }
                if value == "lots"
        ));
    }

    #[test]
    fn test_huge_amount_rejected() {
        let err = ProjectionInputs::new(5, 7.0, 0.0, 2e15, Frequency::Annual).unwrap_err();
        assert_eq!(err.field(), "contribution");
    }

    #[test]
    fn test_invalid_frequency() {
        let raw = text_inputs("5", "7", "0", "0", "4");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert_eq!(err.kind(), "InvalidFrequency");

        let raw = RawInputs {
            frequency: Some(FieldValue::Number(12.5)),
            ..Default::default()
        };
        assert!(raw.resolve(&InputDefaults::default()).is_err());

        let raw = RawInputs {
            frequency: Some(FieldValue::Number(26.0)),
            ..Default::default()
        };
        assert_eq!(raw.resolve(&InputDefaults::default()).unwrap().frequency(), Frequency::Biweekly);
    }

    #[test]
    fn test_first_failing_field_reported() {
        let raw = text_inputs("0", "7", "-1", "0", "9");
        let err = raw.resolve(&InputDefaults::default()).unwrap_err();
        assert_eq!(err.field(), "years");
    }

    #[test]
    fn test_with_fallback_prefers_submitted_fields() {
        let body = RawInputs {
            years: Some("20".into()),
            rate: Some("".into()),
            ..Default::default()
        };
        let query = RawInputs {
            years: Some("5".into()),
            rate: Some("4".into()),
            initial: Some("2,000".into()),
            ..Default::default()
        };

        let merged = body.with_fallback(query);
        assert_eq!(merged.years, Some(FieldValue::Text("20".to_string())));
        assert_eq!(merged.rate, Some(FieldValue::Text("4".to_string())));
        assert_eq!(merged.initial, Some(FieldValue::Text("2,000".to_string())));
        assert_eq!(merged.contribution, None);
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let raw: RawInputs = serde_json::from_str(
            r#"{"years": 15, "rate": "6.5%", "initial": "25,000", "frequency": 52}"#,
        )
        .unwrap();

        assert_eq!(raw.years, Some(FieldValue::Number(15.0)));
        assert_eq!(raw.rate, Some(FieldValue::Text("6.5%".to_string())));
        assert_eq!(raw.contribution, None);

        let inputs = raw.resolve(&InputDefaults::default()).unwrap();
        assert_eq!(inputs.years(), 15);
        assert_eq!(inputs.annual_rate_percent(), 6.5);
        assert_eq!(inputs.initial_principal(), 25_000.0);
        assert_eq!(inputs.periodic_contribution(), 1_000.0);
        assert_eq!(inputs.frequency(), Frequency::Weekly);
    }
}
