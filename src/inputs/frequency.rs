//! Contribution and compounding frequency
//!
//! Contributions are made, and interest compounds, once per period.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of contribution/compounding periods per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Frequency {
    /// Once a year
    Annual,
    /// Twelve times a year
    Monthly,
    /// Every two weeks (26 per year)
    Biweekly,
    /// Every week (52 per year)
    Weekly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Annual,
        Frequency::Monthly,
        Frequency::Biweekly,
        Frequency::Weekly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::Monthly => 12,
            Frequency::Biweekly => 26,
            Frequency::Weekly => 52,
        }
    }

    /// Look up the frequency with exactly `periods` periods per year
    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == periods)
    }

    pub fn name(self) -> &'static str {
        match self {
            Frequency::Annual => "annual",
            Frequency::Monthly => "monthly",
            Frequency::Biweekly => "biweekly",
            Frequency::Weekly => "weekly",
        }
    }
}

impl TryFrom<u32> for Frequency {
    type Error = ValidationError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Self::from_periods(periods).ok_or_else(|| ValidationError::InvalidFrequency {
            value: periods.to_string(),
        })
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> u32 {
        frequency.periods_per_year()
    }
}

/// Accepts either the period count (`"12"`) or its name (`"monthly"`)
impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(periods) = trimmed.parse::<u32>() {
            return Self::from_periods(periods).ok_or_else(|| ValidationError::InvalidFrequency {
                value: s.to_string(),
            });
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "annual" | "annually" | "yearly" => Ok(Frequency::Annual),
            "monthly" => Ok(Frequency::Monthly),
            "biweekly" | "bi-weekly" | "fortnightly" => Ok(Frequency::Biweekly),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(ValidationError::InvalidFrequency {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
