//! Trekking weather advisor
//!
//! This library fetches current weather for trekking sites, classifies it
//! into risk tiers with fixed thresholds, and simulates plausible weather
//! for a site's altitude and the current season.

pub mod advisory;
pub mod config;
pub mod error;
pub mod location_parser;
pub mod logging;
pub mod models;
pub mod risk;
pub mod weather;

// Re-export core types for public API
pub use advisory::{AdvisoryService, SimulatedWeather, SiteAdvisory};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use location_parser::LocationParser;
pub use models::{Location, RiskTier, WeatherRecord};
pub use risk::{Recommendation, classify, recommendations};
pub use weather::{Season, WeatherApiClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
