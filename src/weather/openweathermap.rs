//! `OpenWeatherMap` current weather response structures and conversion
//!
//! Every field is optional on the wire. Missing values fall back to an
//! empty label, 0 °C and 0 m/s.

use crate::models::WeatherRecord;
use serde::Deserialize;

/// Response of `GET /data/2.5/weather`
#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Option<Vec<ConditionEntry>>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub wind: Option<WindReadings>,
    /// Station or city name reported by the API
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConditionEntry {
    /// Condition group, e.g. "Rain", "Snow", "Thunderstorm"
    #[serde(default)]
    pub main: Option<String>,
    /// Condition within the group, e.g. "light rain"
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindReadings {
    #[serde(default)]
    pub speed: Option<f64>,
}

impl CurrentWeatherResponse {
    /// True when the body carries none of the weather sections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.main.is_none() && self.wind.is_none()
    }

    /// Normalize into a [`WeatherRecord`]; `None` for an empty body
    #[must_use]
    pub fn into_record(self) -> Option<WeatherRecord> {
        if self.is_empty() {
            return None;
        }

        let condition = self.weather.and_then(|entries| entries.into_iter().next());
        let (condition_label, description) = match condition {
            Some(entry) => (entry.main.unwrap_or_default(), entry.description),
            None => (String::new(), None),
        };

        let temperature_c = self.main.as_ref().and_then(|m| m.temp).unwrap_or(0.0);
        let humidity = self
            .main
            .as_ref()
            .and_then(|m| m.humidity)
            .map(|h| h.round().clamp(0.0, 100.0) as u8);
        let wind_speed_ms = self.wind.and_then(|w| w.speed).unwrap_or(0.0);

        Some(WeatherRecord {
            condition_label,
            temperature_c,
            wind_speed_ms,
            description,
            humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_response() {
        let body = json!({
            "weather": [{"id": 601, "main": "Snow", "description": "snow", "icon": "13d"}],
            "main": {"temp": -14.2, "feels_like": -21.0, "humidity": 86},
            "wind": {"speed": 9.3, "deg": 250},
            "name": "Khumjung"
        });
        let response: CurrentWeatherResponse = serde_json::from_value(body).unwrap();
        let record = response.into_record().unwrap();

        assert_eq!(record.condition_label, "Snow");
        assert_eq!(record.description.as_deref(), Some("snow"));
        assert_eq!(record.temperature_c, -14.2);
        assert_eq!(record.wind_speed_ms, 9.3);
        assert_eq!(record.humidity, Some(86));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let body = json!({"main": {}, "weather": []});
        let response: CurrentWeatherResponse = serde_json::from_value(body).unwrap();
        let record = response.into_record().unwrap();

        assert_eq!(record.condition_label, "");
        assert_eq!(record.temperature_c, 0.0);
        assert_eq!(record.wind_speed_ms, 0.0);
        assert!(record.description.is_none());
        assert!(record.humidity.is_none());
    }

    #[test]
    fn test_empty_body_is_no_record() {
        let response: CurrentWeatherResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.is_empty());
        assert!(response.into_record().is_none());
    }

    #[test]
    fn test_body_with_only_metadata_is_empty() {
        let body = json!({"cod": 200, "name": "Nowhere"});
        let response: CurrentWeatherResponse = serde_json::from_value(body).unwrap();
        assert!(response.into_record().is_none());
    }
}
