//! Cent rounding applied to every reported monetary value

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tie-breaking rule when rounding to cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// 0.125 -> 0.13, -0.125 -> -0.13
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 0.125 -> 0.12, 0.135 -> 0.14
    HalfEven,
}

/// Scaled values this large carry no fractional cents
const WHOLE_CENTS_LIMIT: f64 = 1e14;

/// How many ulps short of (or past) one half still counts as a tie
const TIE_ULPS: f64 = 4.0;

impl RoundingMode {
    /// Round `value` to 2 decimal places
    ///
    /// Values whose decimal form ends in 5 round as ties even when the
    /// stored binary value falls just short: 1.005 -> 1.01.
    pub fn to_cents(self, value: f64) -> f64 {
        let scaled = value * 100.0;
        let rounded = if scaled.abs() >= WHOLE_CENTS_LIMIT {
            scaled.round()
        } else {
            self.round_scaled(scaled)
        };
        // + 0.0 turns -0.0 into 0.0
        rounded / 100.0 + 0.0
    }

    fn round_scaled(self, scaled: f64) -> f64 {
        let floor = scaled.floor();
        let fraction = scaled - floor;
        let tolerance = scaled.abs().max(1.0) * f64::EPSILON * TIE_ULPS;
        if (fraction - 0.5).abs() > tolerance {
            return scaled.round();
        }

        match self {
            RoundingMode::HalfAwayFromZero => {
                if scaled > 0.0 { floor + 1.0 } else { floor }
            }
            RoundingMode::HalfEven => {
                if floor % 2.0 == 0.0 { floor } else { floor + 1.0 }
            }
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away" | "half-away-from-zero" => Ok(RoundingMode::HalfAwayFromZero),
            "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            other => Err(format!(
                "unknown rounding mode `{}` (expected half-away or half-even)",
                other
            )),
        }
    }
}
