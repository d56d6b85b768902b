//! Location input parsing
//!
//! Turns command-line input (site names, "lat,lon" strings, altitudes) into
//! [`Location`] values.

use crate::models::Location;
use crate::{AdvisorError, Result};
use tracing::debug;

/// Location parsing utilities
pub struct LocationParser;

impl LocationParser {
    /// Resolve a built-in site by name
    pub fn resolve_site(name: &str) -> Result<Location> {
        if name.trim().is_empty() {
            return Err(AdvisorError::validation("Site name cannot be empty"));
        }

        Location::find_site(name).ok_or_else(|| {
            let known: Vec<String> = Location::known_sites().into_iter().map(|s| s.name).collect();
            AdvisorError::validation(format!(
                "Unknown site '{}'. Known sites: {}",
                name.trim(),
                known.join(", ")
            ))
        })
    }

    /// Build a location from a coordinate string and an optional altitude
    pub fn resolve_coordinates(input: &str, altitude_m: Option<f64>) -> Result<Location> {
        let (lat, lon) = Self::parse_coordinates(input)?;
        if let Some(altitude) = altitude_m {
            Self::validate_altitude(altitude)?;
        }

        debug!("Resolved coordinates: ({}, {})", lat, lon);
        Ok(Location::from_coordinates(lat, lon, altitude_m))
    }

    /// Parse coordinates from string like "27.9881,86.9250" or "27.9881 86.9250"
    pub fn parse_coordinates(input: &str) -> Result<(f64, f64)> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(AdvisorError::validation(
                "Coordinates must be in format 'lat,lon'",
            ));
        }

        let lat = parts[0]
            .parse::<f64>()
            .map_err(|_| AdvisorError::validation(format!("Invalid latitude: {}", parts[0])))?;
        let lon = parts[1]
            .parse::<f64>()
            .map_err(|_| AdvisorError::validation(format!("Invalid longitude: {}", parts[1])))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(AdvisorError::validation(format!(
                "Latitude must be between -90 and 90, got: {lat}"
            )));
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(AdvisorError::validation(format!(
                "Longitude must be between -180 and 180, got: {lon}"
            )));
        }

        Ok((lat, lon))
    }

    /// Altitudes must be finite and not below sea level
    pub fn validate_altitude(altitude_m: f64) -> Result<()> {
        if !altitude_m.is_finite() || altitude_m < 0.0 {
            return Err(AdvisorError::validation(format!(
                "Altitude must be a non-negative number of meters, got: {altitude_m}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("27.9881,86.9250", 27.9881, 86.925)]
    #[case("27.9881 86.9250", 27.9881, 86.925)]
    #[case(" -33.5, -70.25 ", -33.5, -70.25)]
    fn test_parse_coordinates(#[case] input: &str, #[case] lat: f64, #[case] lon: f64) {
        assert_eq!(LocationParser::parse_coordinates(input).unwrap(), (lat, lon));
    }

    #[rstest]
    #[case("27.9881")]
    #[case("1,2,3")]
    #[case("north,east")]
    #[case("91.0,8.0")]
    #[case("46.0,-181.0")]
    #[case("")]
    fn test_parse_coordinates_rejects(#[case] input: &str) {
        let err = LocationParser::parse_coordinates(input).unwrap_err();
        assert!(matches!(err, AdvisorError::Validation { .. }));
    }

    #[test]
    fn test_resolve_site() {
        let site = LocationParser::resolve_site("manaslu circuit").unwrap();
        assert_eq!(site.name, "Manaslu Circuit");
        assert_eq!(site.altitude_m, Some(5106.0));
    }

    #[test]
    fn test_resolve_unknown_site_lists_known_sites() {
        let err = LocationParser::resolve_site("Kanchenjunga").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown site 'Kanchenjunga'"));
        assert!(message.contains("Everest Base Camp"));
    }

    #[test]
    fn test_resolve_empty_site() {
        assert!(LocationParser::resolve_site("   ").is_err());
    }

    #[test]
    fn test_resolve_coordinates_with_altitude() {
        let location = LocationParser::resolve_coordinates("28.2097,83.9856", Some(822.0)).unwrap();
        assert_eq!(location.altitude_m, Some(822.0));
        assert_eq!(location.name, "28.2097, 83.9856");
    }

    #[test]
    fn test_negative_altitude_rejected() {
        assert!(LocationParser::resolve_coordinates("28.2,83.9", Some(-5.0)).is_err());
        assert!(LocationParser::validate_altitude(f64::NAN).is_err());
        assert!(LocationParser::validate_altitude(0.0).is_ok());
    }
}
