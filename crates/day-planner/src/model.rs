//! Domain Models
//!
//! Normalized value shapes the reasoning engine works with. Both are always
//! fully populated: the location resolver substitutes a fixed fallback on
//! failure, and the weather reading's description never comes back empty.

use serde::{Deserialize, Serialize};

/// Coordinate range check for latitude values
pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Coordinate range check for longitude values
pub const LNG_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A resolved geographic position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City name, or "Unknown" if the provider omitted it
    pub city: String,

    /// Administrative region, or "Unknown"
    pub region: String,

    /// Country name, or "Unknown"
    pub country: String,

    /// Latitude in degrees, 0.0 if the provider omitted it
    pub lat: f64,

    /// Longitude in degrees, 0.0 if the provider omitted it
    pub lng: f64,
}

impl Location {
    /// The fixed substitute returned when live resolution fails
    pub fn fallback() -> Self {
        Self {
            city: "Київ".into(),
            region: "Київська область".into(),
            country: "Україна".into(),
            lat: 50.4501,
            lng: 30.5234,
        }
    }

    /// Whether both coordinates are inside their valid ranges
    pub fn has_valid_coordinates(&self) -> bool {
        LAT_RANGE.contains(&self.lat) && LNG_RANGE.contains(&self.lng)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} (lat {}, lng {})",
            self.city, self.region, self.country, self.lat, self.lng
        )
    }
}

/// Current weather conditions, normalized for the reasoning engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Formatted apparent temperature, e.g. "21°C"
    pub temperature: String,

    /// Human-readable condition description, never empty
    pub description: String,
}

impl WeatherReading {
    /// The fixed reading returned in stub mode (no provider credential).
    /// The space before the unit matches the canned value as shipped;
    /// the live path formats without it.
    pub fn stub() -> Self {
        Self {
            temperature: "21 °C".into(),
            description: "Sunny".into(),
        }
    }
}

impl std::fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.temperature, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_location() {
        let loc = Location::fallback();
        assert_eq!(loc.city, "Київ");
        assert_eq!(loc.region, "Київська область");
        assert_eq!(loc.country, "Україна");
        assert!((loc.lat - 50.4501).abs() < f64::EPSILON);
        assert!((loc.lng - 30.5234).abs() < f64::EPSILON);
        assert!(loc.has_valid_coordinates());
    }

    #[test]
    fn test_coordinate_invariant() {
        let mut loc = Location::fallback();
        loc.lat = 91.0;
        assert!(!loc.has_valid_coordinates());

        loc.lat = 0.0;
        loc.lng = -180.5;
        assert!(!loc.has_valid_coordinates());
    }

    #[test]
    fn test_stub_reading() {
        let reading = WeatherReading::stub();
        assert_eq!(reading.temperature, "21 °C");
        assert_eq!(reading.description, "Sunny");
    }
}
