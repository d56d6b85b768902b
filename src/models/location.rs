//! Location model and the built-in table of trekking sites

use serde::{Deserialize, Serialize};

/// A trekking site from the built-in table.
struct KnownSite {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    altitude_m: f64,
}

const KNOWN_SITES: &[KnownSite] = &[
    KnownSite { name: "Everest Base Camp", latitude: 27.9881, longitude: 86.9250, altitude_m: 5364.0 },
    KnownSite { name: "Annapurna Base Camp", latitude: 28.5500, longitude: 83.8167, altitude_m: 4130.0 },
    KnownSite { name: "Langtang Valley", latitude: 28.2000, longitude: 85.5000, altitude_m: 3500.0 },
    KnownSite { name: "Manaslu Circuit", latitude: 28.5500, longitude: 84.5500, altitude_m: 5106.0 },
];

/// Geographic location, optionally with a known altitude
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Site name, or formatted coordinates for ad-hoc locations
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude in meters above sea level
    pub altitude_m: Option<f64>,
}

impl Location {
    /// Create a location for arbitrary coordinates
    #[must_use]
    pub fn from_coordinates(latitude: f64, longitude: f64, altitude_m: Option<f64>) -> Self {
        Self {
            name: format!("{latitude:.4}, {longitude:.4}"),
            latitude,
            longitude,
            altitude_m,
        }
    }

    /// All built-in trekking sites, in table order
    #[must_use]
    pub fn known_sites() -> Vec<Location> {
        KNOWN_SITES.iter().map(Location::from).collect()
    }

    /// Find a built-in site by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn find_site(name: &str) -> Option<Location> {
        let wanted = name.trim();
        KNOWN_SITES
            .iter()
            .find(|site| site.name.eq_ignore_ascii_case(wanted))
            .map(Location::from)
    }

    /// Format location as "27.9881°N, 86.9250°E"
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        format!(
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

impl From<&KnownSite> for Location {
    fn from(site: &KnownSite) -> Self {
        Self {
            name: site.name.to_string(),
            latitude: site.latitude,
            longitude: site.longitude,
            altitude_m: Some(site.altitude_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sites_table() {
        let sites = Location::known_sites();
        assert_eq!(sites.len(), 4);
        assert_eq!(sites[0].name, "Everest Base Camp");
        assert_eq!(sites[0].altitude_m, Some(5364.0));
        assert!(sites.iter().all(|s| s.altitude_m.is_some()));
    }

    #[test]
    fn test_find_site_is_case_insensitive() {
        let site = Location::find_site("  langtang valley ").unwrap();
        assert_eq!(site.name, "Langtang Valley");
        assert_eq!(site.latitude, 28.2);
        assert_eq!(site.longitude, 85.5);
    }

    #[test]
    fn test_find_unknown_site() {
        assert!(Location::find_site("K2 Base Camp").is_none());
    }

    #[test]
    fn test_from_coordinates_name() {
        let location = Location::from_coordinates(27.7172, 85.324, None);
        assert_eq!(location.name, "27.7172, 85.3240");
        assert!(location.altitude_m.is_none());
    }

    #[test]
    fn test_format_coordinates() {
        let ebc = Location::find_site("Everest Base Camp").unwrap();
        assert_eq!(ebc.format_coordinates(), "27.9881°N, 86.9250°E");

        let south_west = Location::from_coordinates(-33.5, -70.25, None);
        assert_eq!(south_west.format_coordinates(), "33.5000°S, 70.2500°W");
    }
}
