//! Site advisories
//!
//! Combines a live weather lookup, its risk tier and recommendations with a
//! simulated reading for the site's altitude into one report per location.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Location, RiskTier, WeatherRecord, weather_summary};
use crate::risk::{self, Recommendation};
use crate::weather::{Season, WeatherApiClient, synthetic};

/// Synthetic reading for a site's altitude
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedWeather {
    pub season: Season,
    pub altitude_m: f64,
    pub record: WeatherRecord,
    pub risk: RiskTier,
}

impl SimulatedWeather {
    #[must_use]
    pub fn new(season: Season, altitude_m: f64, record: WeatherRecord) -> Self {
        let risk = risk::classify(Some(&record));
        Self {
            season,
            altitude_m,
            record,
            risk,
        }
    }

    /// Simulate the current season at an altitude
    #[must_use]
    pub fn for_altitude(altitude_m: f64) -> Self {
        let season = Season::current();
        let record = synthetic::generate_with(altitude_m, season, &mut rand::rng());
        Self::new(season, altitude_m, record)
    }
}

/// Advisory for one location
#[derive(Debug, Clone, Serialize)]
pub struct SiteAdvisory {
    pub location: Location,
    /// Live reading, `None` when the lookup failed
    pub current: Option<WeatherRecord>,
    pub risk: RiskTier,
    pub advisory: String,
    pub recommendations: Vec<Recommendation>,
    pub simulated: Option<SimulatedWeather>,
}

impl SiteAdvisory {
    /// Build an advisory from an already fetched reading
    #[must_use]
    pub fn assess(
        location: Location,
        current: Option<WeatherRecord>,
        simulated: Option<SimulatedWeather>,
    ) -> Self {
        let risk = risk::classify(current.as_ref());
        let recommendations = current
            .as_ref()
            .map(risk::recommendations)
            .unwrap_or_default();

        Self {
            location,
            current,
            risk,
            advisory: risk.advisory().to_string(),
            recommendations,
            simulated,
        }
    }
}

impl fmt::Display for SiteAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Location: {}", self.location.name)?;
        if let Some(altitude) = self.location.altitude_m {
            writeln!(f, "Altitude: {altitude:.0}m")?;
        }
        writeln!(f, "Coordinates: {}", self.location.format_coordinates())?;
        writeln!(f)?;

        writeln!(f, "{}", weather_summary(self.current.as_ref()))?;
        if let Some(record) = &self.current {
            if let Some(humidity) = record.humidity {
                writeln!(f, "Humidity: {humidity}%")?;
            }
            if let Some(description) = &record.description {
                writeln!(f, "Weather: {description}")?;
            }
        }
        writeln!(f, "Safety Assessment: {}", self.risk)?;
        writeln!(f, "{}", self.advisory)?;

        if !self.recommendations.is_empty() {
            writeln!(f, "Recommendations:")?;
            for recommendation in &self.recommendations {
                writeln!(f, "  - {recommendation}")?;
            }
        }

        if let Some(simulated) = &self.simulated {
            writeln!(f)?;
            writeln!(
                f,
                "Simulated Weather for {:.0}m ({}):",
                simulated.altitude_m, simulated.season
            )?;
            writeln!(f, "{}", simulated.record)?;
            writeln!(f, "Simulated Safety Assessment: {}", simulated.risk)?;
        }

        Ok(())
    }
}

/// Produces advisories by looking up live weather for locations
pub struct AdvisoryService {
    client: WeatherApiClient,
}

impl AdvisoryService {
    #[must_use]
    pub fn new(client: WeatherApiClient) -> Self {
        Self { client }
    }

    /// Advisory for one location; simulates only when the altitude is known
    pub async fn advise(&self, location: Location) -> SiteAdvisory {
        debug!("Assessing {}", location.name);

        let current = self
            .client
            .current_weather(location.latitude, location.longitude)
            .await;
        let simulated = location.altitude_m.map(SimulatedWeather::for_altitude);

        let advisory = SiteAdvisory::assess(location, current, simulated);
        info!(
            site = %advisory.location.name,
            risk = %advisory.risk,
            "Assessment complete"
        );
        advisory
    }

    /// Advisories for several locations, fetched one after another
    pub async fn advise_all(&self, locations: Vec<Location>) -> Vec<SiteAdvisory> {
        let mut advisories = Vec::with_capacity(locations.len());
        for location in locations {
            advisories.push(self.advise(location).await);
        }
        advisories
    }
}
