//! Weather risk classification
//!
//! Maps a normalized [`WeatherRecord`] onto a [`RiskTier`] using fixed
//! thresholds on temperature, wind speed and the condition keyword, and
//! derives gear recommendations from the same record.

use crate::models::{RiskTier, WeatherRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conditions that are high risk regardless of temperature and wind
pub const HIGH_RISK_CONDITIONS: &[&str] = &["Thunderstorm", "Blizzard"];
/// Conditions that are at least moderate risk
pub const MODERATE_RISK_CONDITIONS: &[&str] = &["Snow", "Heavy Rain"];

/// Below this temperature (°C) conditions are high risk
pub const HIGH_RISK_MIN_TEMPERATURE_C: f64 = -20.0;
/// Above this wind speed (m/s) conditions are high risk
pub const HIGH_RISK_MAX_WIND_MS: f64 = 25.0;
/// Below this temperature (°C) conditions are moderate risk
pub const MODERATE_RISK_MIN_TEMPERATURE_C: f64 = -10.0;
/// Above this wind speed (m/s) conditions are moderate risk
pub const MODERATE_RISK_MAX_WIND_MS: f64 = 20.0;

const COLD_GEAR_BELOW_C: f64 = -10.0;
const STRONG_WIND_ABOVE_MS: f64 = 15.0;

/// Classify a weather record; a missing record is [`RiskTier::Unknown`].
///
/// Rules are evaluated in order and the first match wins.
#[must_use]
pub fn classify(record: Option<&WeatherRecord>) -> RiskTier {
    let Some(record) = record else {
        return RiskTier::Unknown;
    };

    let condition = record.condition_label.as_str();
    let temperature = record.temperature_c;
    let wind = record.wind_speed_ms;

    if HIGH_RISK_CONDITIONS.contains(&condition)
        || temperature < HIGH_RISK_MIN_TEMPERATURE_C
        || wind > HIGH_RISK_MAX_WIND_MS
    {
        RiskTier::HighRisk
    } else if MODERATE_RISK_CONDITIONS.contains(&condition)
        || temperature < MODERATE_RISK_MIN_TEMPERATURE_C
        || wind > MODERATE_RISK_MAX_WIND_MS
    {
        RiskTier::ModerateRisk
    } else {
        RiskTier::Safe
    }
}

/// Gear and behaviour recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ColdWeatherGear,
    StrongWinds,
    WaterproofGear,
}

impl Recommendation {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::ColdWeatherGear => "Wear thermal layers and proper cold-weather gear",
            Self::StrongWinds => "Be cautious of strong winds, especially on exposed ridges",
            Self::WaterproofGear => {
                "Bring waterproof gear and be prepared for slippery conditions"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Recommendations for a record, in a stable order
#[must_use]
pub fn recommendations(record: &WeatherRecord) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if record.temperature_c < COLD_GEAR_BELOW_C {
        advice.push(Recommendation::ColdWeatherGear);
    }
    if record.wind_speed_ms > STRONG_WIND_ABOVE_MS {
        advice.push(Recommendation::StrongWinds);
    }

    // Synthetic records carry no description; fall back to the label
    let text = record
        .description
        .as_deref()
        .unwrap_or(record.condition_label.as_str())
        .to_lowercase();
    if text.contains("rain") || text.contains("snow") {
        advice.push(Recommendation::WaterproofGear);
    }

    advice
}
