//! Data models for the trekking advisor
//!
//! This module contains the core domain models organized by concern:
//! - Location: Trekking sites and ad-hoc coordinates
//! - Weather: Normalized weather snapshots
//! - Risk: Risk tiers derived from weather

pub mod location;
pub mod risk;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use risk::RiskTier;
pub use weather::{WeatherRecord, weather_summary};
