//! Risk tier model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical safety classification derived from weather thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Safe,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
    /// No weather data was available to classify
    Unknown,
}

impl RiskTier {
    /// Display label, e.g. "High Risk"
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::ModerateRisk => "Moderate Risk",
            Self::HighRisk => "High Risk",
            Self::Unknown => "Unknown",
        }
    }

    /// One-line advisory shown alongside the tier
    #[must_use]
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::HighRisk => "HIGH RISK: Consider postponing trek or taking extra precautions",
            Self::ModerateRisk => "MODERATE RISK: Proceed with caution and proper equipment",
            Self::Safe => "SAFE: Standard precautions advised",
            Self::Unknown => "Unable to fetch weather data. Please try again later.",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
