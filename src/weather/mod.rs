//! Current weather lookup against `OpenWeatherMap`
//!
//! A lookup is a single GET with no retry. Every failure (transport, HTTP
//! status, undecodable body, missing API key) is logged and collapses to
//! `None`, which the classifier reports as [`RiskTier::Unknown`].
//!
//! [`RiskTier::Unknown`]: crate::models::RiskTier::Unknown

use std::time::{Duration, Instant};

use reqwest::{Client, Url};
use tracing::{debug, error, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::WeatherRecord;
use crate::{AdvisorError, Result};

pub mod openweathermap;
pub mod synthetic;

pub use openweathermap::CurrentWeatherResponse;
pub use synthetic::{Season, SeasonProfile};

/// Temperatures in Celsius and wind in m/s
const UNITS: &str = "metric";

const USER_AGENT: &str = concat!("trekking-advisor/", env!("CARGO_PKG_VERSION"));

/// Weather API client for `OpenWeatherMap`
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AdvisorError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch current weather for the given coordinates.
    ///
    /// Returns `None` on any failure; the cause is only visible in the logs.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> Option<WeatherRecord> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("No weather API key configured, skipping lookup");
            return None;
        };

        match self.fetch_current(api_key, latitude, longitude).await {
            Ok(record) => record,
            Err(e) => {
                error!("Error fetching weather data: {}", e);
                None
            }
        }
    }

    async fn fetch_current(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<WeatherRecord>> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", UNITS.to_string()),
            ],
        )
        .map_err(|e| AdvisorError::api(format!("Invalid weather API URL: {e}")))?;

        let start_time = Instant::now();
        debug!("Requesting current weather for {:.4}, {:.4}", latitude, longitude);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AdvisorError::api(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::api(format!(
                "Weather API returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::api(format!("Invalid weather response: {e}")))?;

        let station = body.name.clone();
        let record = body.into_record();
        let duration = start_time.elapsed();

        match &record {
            Some(record) => info!(
                station = station.as_deref().unwrap_or("unknown"),
                condition = %record.display_condition(),
                "Retrieved current weather in {:.3}s",
                duration.as_secs_f64()
            ),
            None => warn!("Weather API returned an empty body"),
        }

        if duration.as_secs() > 5 {
            warn!("Slow weather API response: {:.3}s", duration.as_secs_f64());
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "test_api_key_123";

    fn client_for(server: &MockServer, api_key: Option<&str>) -> WeatherApiClient {
        let config = WeatherConfig {
            api_key: api_key.map(str::to_string),
            base_url: format!("{}/data/2.5/weather", server.uri()),
            timeout_seconds: 5,
        };
        WeatherApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_current_weather_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "27.9881"))
            .and(query_param("lon", "86.925"))
            .and(query_param("appid", TEST_KEY))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{"main": "Clouds", "description": "broken clouds"}],
                "main": {"temp": -8.4, "humidity": 54},
                "wind": {"speed": 6.2},
                "name": "Lobuche"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TEST_KEY));
        let record = client.current_weather(27.9881, 86.925).await.unwrap();

        assert_eq!(record.condition_label, "Clouds");
        assert_eq!(record.temperature_c, -8.4);
        assert_eq!(record.wind_speed_ms, 6.2);
        assert_eq!(record.humidity, Some(54));
    }

    #[tokio::test]
    async fn test_unauthorized_collapses_to_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "cod": 401,
                "message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TEST_KEY));
        assert!(client.current_weather(28.2, 85.5).await.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TEST_KEY));
        assert!(client.current_weather(28.55, 84.55).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_collapses_to_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TEST_KEY));
        assert!(client.current_weather(28.55, 83.8167).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_json_body_collapses_to_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TEST_KEY));
        assert!(client.current_weather(28.55, 83.8167).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(client.current_weather(27.9881, 86.925).await.is_none());
    }

    #[tokio::test]
    async fn test_connection_refused_collapses_to_none() {
        let config = WeatherConfig {
            api_key: Some(TEST_KEY.to_string()),
            base_url: "http://127.0.0.1:9/data/2.5/weather".to_string(),
            timeout_seconds: 2,
        };
        let client = WeatherApiClient::new(&config).unwrap();
        assert!(client.current_weather(0.0, 0.0).await.is_none());
    }
}
