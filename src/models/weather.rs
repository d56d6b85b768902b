//! Normalized weather snapshot and display methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized weather snapshot, produced by the lookup or the generator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Main condition keyword, e.g. "Clear", "Snow", "Thunderstorm".
    /// Empty when the source did not report one.
    pub condition_label: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Free-text condition, e.g. "light snow"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relative humidity in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<u8>,
}

impl WeatherRecord {
    #[must_use]
    pub fn new(condition_label: impl Into<String>, temperature_c: f64, wind_speed_ms: f64) -> Self {
        Self {
            condition_label: condition_label.into(),
            temperature_c,
            wind_speed_ms,
            description: None,
            humidity: None,
        }
    }

    /// Condition label for display, "Unknown" when empty
    #[must_use]
    pub fn display_condition(&self) -> &str {
        if self.condition_label.is_empty() {
            "Unknown"
        } else {
            &self.condition_label
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_c)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} m/s", self.wind_speed_ms)
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Conditions: {}, Temperature: {}, Wind Speed: {}",
            self.display_condition(),
            self.format_temperature(),
            self.format_wind()
        )
    }
}

/// Human-readable one-line summary of a possibly missing record
#[must_use]
pub fn weather_summary(record: Option<&WeatherRecord>) -> String {
    match record {
        Some(record) => record.to_string(),
        None => "Weather data unavailable".to_string(),
    }
}
