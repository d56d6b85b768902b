//! Synthetic weather for a given altitude and season
//!
//! Draws a plausible record from per-season ranges, cooled by the standard
//! lapse rate above 1000 m and with wind scaled up with altitude. Used for
//! the "what is it like up there" simulation next to the live reading.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Local};
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::AdvisorError;
use crate::models::WeatherRecord;

/// Temperature change per meter of altitude (°C/m)
pub const LAPSE_RATE_C_PER_M: f64 = -0.0065;
/// Altitude at which the seasonal temperature ranges apply unadjusted
pub const LAPSE_REFERENCE_ALTITUDE_M: f64 = 1000.0;
/// Wind grows by 100% per this many meters of altitude
pub const WIND_SCALE_ALTITUDE_M: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Base conditions for a season, before altitude adjustment
#[derive(Debug)]
pub struct SeasonProfile {
    /// Temperature range in °C
    pub temperature_c: (f64, f64),
    /// Wind speed range in m/s
    pub wind_speed_ms: (f64, f64),
    /// Condition labels, picked uniformly
    pub conditions: &'static [&'static str],
}

const SPRING: SeasonProfile = SeasonProfile {
    temperature_c: (5.0, 15.0),
    wind_speed_ms: (5.0, 15.0),
    conditions: &["Clear", "Clouds", "Rain"],
};

const SUMMER: SeasonProfile = SeasonProfile {
    temperature_c: (10.0, 20.0),
    wind_speed_ms: (3.0, 12.0),
    conditions: &["Clear", "Clouds", "Rain", "Thunderstorm"],
};

const AUTUMN: SeasonProfile = SeasonProfile {
    temperature_c: (0.0, 10.0),
    wind_speed_ms: (8.0, 20.0),
    conditions: &["Clear", "Clouds", "Snow"],
};

const WINTER: SeasonProfile = SeasonProfile {
    temperature_c: (-15.0, 0.0),
    wind_speed_ms: (10.0, 25.0),
    conditions: &["Clear", "Clouds", "Snow", "Blizzard"],
};

impl Season {
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Season for a calendar month (1-12): Mar-May spring, Jun-Aug summer,
    /// Sep-Nov autumn, anything else winter.
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Season of the current local date
    #[must_use]
    pub fn current() -> Self {
        Self::from_month(Local::now().month())
    }

    #[must_use]
    pub fn profile(&self) -> &'static SeasonProfile {
        match self {
            Self::Spring => &SPRING,
            Self::Summer => &SUMMER,
            Self::Autumn => &AUTUMN,
            Self::Winter => &WINTER,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AdvisorError::validation(format!(
                    "Unknown season '{s}'. Must be one of: spring, summer, autumn, winter"
                ))
            })
    }
}

/// Temperature offset (°C) relative to the seasonal range at this altitude
#[must_use]
pub fn altitude_temperature_offset(altitude_m: f64) -> f64 {
    (altitude_m - LAPSE_REFERENCE_ALTITUDE_M) * LAPSE_RATE_C_PER_M
}

/// Multiplier applied to the seasonal wind range at this altitude
#[must_use]
pub fn altitude_wind_factor(altitude_m: f64) -> f64 {
    1.0 + altitude_m / WIND_SCALE_ALTITUDE_M
}

/// Altitude-adjusted ranges a generated record falls into (before rounding)
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticBounds {
    pub temperature_c: RangeInclusive<f64>,
    pub wind_speed_ms: RangeInclusive<f64>,
}

#[must_use]
pub fn bounds(season: Season, altitude_m: f64) -> SyntheticBounds {
    let profile = season.profile();
    let offset = altitude_temperature_offset(altitude_m);
    let factor = altitude_wind_factor(altitude_m);

    SyntheticBounds {
        temperature_c: (profile.temperature_c.0 + offset)..=(profile.temperature_c.1 + offset),
        wind_speed_ms: (profile.wind_speed_ms.0 * factor)..=(profile.wind_speed_ms.1 * factor),
    }
}

/// Generate a record for the current season using the thread-local RNG
#[must_use]
pub fn generate(altitude_m: f64) -> WeatherRecord {
    generate_with(altitude_m, Season::current(), &mut rand::rng())
}

/// Generate a record for an explicit season and random source
pub fn generate_with<R: Rng + ?Sized>(altitude_m: f64, season: Season, rng: &mut R) -> WeatherRecord {
    let profile = season.profile();

    let (temp_min, temp_max) = profile.temperature_c;
    let temperature = rng.random_range(temp_min..=temp_max) + altitude_temperature_offset(altitude_m);

    let (wind_min, wind_max) = profile.wind_speed_ms;
    let wind = rng.random_range(wind_min..=wind_max) * altitude_wind_factor(altitude_m);

    let condition = profile.conditions[rng.random_range(0..profile.conditions.len())];

    WeatherRecord::new(condition, round_one_decimal(temperature), round_one_decimal(wind))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    // Rounding to one decimal can move a value at most this far outside its range
    const ROUNDING_SLACK: f64 = 0.05 + 1e-9;

    #[rstest]
    #[case(1, Season::Winter)]
    #[case(2, Season::Winter)]
    #[case(3, Season::Spring)]
    #[case(5, Season::Spring)]
    #[case(6, Season::Summer)]
    #[case(8, Season::Summer)]
    #[case(9, Season::Autumn)]
    #[case(11, Season::Autumn)]
    #[case(12, Season::Winter)]
    fn test_season_from_month(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::from_month(month), expected);
    }

    #[test]
    fn test_season_parsing() {
        assert_eq!("Autumn".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_altitude_adjustments() {
        assert_eq!(altitude_temperature_offset(1000.0), 0.0);
        assert!((altitude_temperature_offset(5364.0) - (-28.366)).abs() < 1e-9);
        assert!((altitude_temperature_offset(0.0) - 6.5).abs() < 1e-9);
        assert_eq!(altitude_wind_factor(0.0), 1.0);
        assert_eq!(altitude_wind_factor(5000.0), 2.0);
    }

    #[test]
    fn test_generated_values_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for season in Season::ALL {
            for altitude in (0..=9000).step_by(250) {
                let altitude = f64::from(altitude);
                let expected = bounds(season, altitude);

                for _ in 0..40 {
                    let record = generate_with(altitude, season, &mut rng);

                    assert!(
                        record.temperature_c >= expected.temperature_c.start() - ROUNDING_SLACK
                            && record.temperature_c <= expected.temperature_c.end() + ROUNDING_SLACK,
                        "{season} at {altitude}m: temperature {} outside {:?}",
                        record.temperature_c,
                        expected.temperature_c
                    );
                    assert!(
                        record.wind_speed_ms >= expected.wind_speed_ms.start() - ROUNDING_SLACK
                            && record.wind_speed_ms <= expected.wind_speed_ms.end() + ROUNDING_SLACK,
                        "{season} at {altitude}m: wind {} outside {:?}",
                        record.wind_speed_ms,
                        expected.wind_speed_ms
                    );
                    assert!(season.profile().conditions.contains(&record.condition_label.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_generated_values_are_rounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let record = generate_with(4130.0, Season::Autumn, &mut rng);
            assert_eq!(round_one_decimal(record.temperature_c), record.temperature_c);
            assert_eq!(round_one_decimal(record.wind_speed_ms), record.wind_speed_ms);
            assert!(record.description.is_none());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_with(3500.0, Season::Summer, &mut StdRng::seed_from_u64(99));
        let b = generate_with(3500.0, Season::Summer, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_condition_is_reachable() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(generate_with(5364.0, Season::Winter, &mut rng).condition_label);
        }
        assert_eq!(seen.len(), Season::Winter.profile().conditions.len());
    }

    #[test]
    fn test_generate_uses_current_season_profile() {
        let record = generate(0.0);
        let profile = Season::current().profile();
        assert!(profile.conditions.contains(&record.condition_label.as_str()));
    }
}
