//! Resolvers
//!
//! The two lookups the reasoning engine chains: network origin → location,
//! coordinates → weather. Their failure policies differ on purpose:
//!
//! - `LocationResolver::resolve` is total. Any failure collapses to the fixed
//!   fallback location, so the engine never sees a location error.
//! - `WeatherResolver::resolve` propagates live-mode failures. A fabricated
//!   weather reading is unsafe to hand the engine silently, so the failure
//!   surfaces and is subject to the run's retry budget.

use std::sync::Arc;

use crate::deps::PlannerDeps;
use crate::error::{PlannerError, Result};
use crate::geo::{GeoClient, GeoFix, IpApiClient};
use crate::model::{LAT_RANGE, LNG_RANGE, Location, WeatherReading};
use crate::weather::{TomorrowClient, WeatherClient};
use crate::weather_code;

/// Resolves an approximate position from the caller's network origin
pub struct LocationResolver {
    geo: Arc<dyn GeoClient>,
}

impl LocationResolver {
    pub fn new(geo: Arc<dyn GeoClient>) -> Self {
        Self { geo }
    }

    /// Live resolver over the run's shared transport
    pub fn from_deps(deps: &PlannerDeps) -> Self {
        Self::new(Arc::new(IpApiClient::new(deps.http.clone())))
    }

    /// Resolve the current location. Total: never returns an error.
    ///
    /// Missing string fields become "Unknown", missing coordinates become
    /// 0.0. A failed lookup, or a fix with out-of-range coordinates, is
    /// logged as a warning and replaced with the fallback location.
    pub async fn resolve(&self) -> Location {
        match self.geo.current_fix().await {
            Ok(fix) => {
                let location = normalize(fix);
                if location.has_valid_coordinates() {
                    location
                } else {
                    tracing::warn!(
                        provider = self.geo.name(),
                        lat = location.lat,
                        lng = location.lng,
                        "Provider returned out-of-range coordinates, using fallback location"
                    );
                    Location::fallback()
                }
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.geo.name(),
                    error = %e,
                    "Failed to get location by IP, using fallback location"
                );
                Location::fallback()
            }
        }
    }
}

/// Fill gaps in a raw fix with the documented substitutes
fn normalize(fix: GeoFix) -> Location {
    Location {
        city: fix.city.unwrap_or_else(|| "Unknown".into()),
        region: fix.region.unwrap_or_else(|| "Unknown".into()),
        country: fix.country_name.unwrap_or_else(|| "Unknown".into()),
        lat: fix.latitude.unwrap_or(0.0),
        lng: fix.longitude.unwrap_or(0.0),
    }
}

/// Resolves current weather conditions at given coordinates
pub struct WeatherResolver {
    /// Live client, or None for stub mode
    client: Option<Arc<dyn WeatherClient>>,
}

impl WeatherResolver {
    /// Stub mode: no provider credential, fixed canned reading, no network
    pub fn stub() -> Self {
        Self { client: None }
    }

    /// Live mode over the given client
    pub fn live(client: Arc<dyn WeatherClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Live resolver over the run's shared transport when a credential is
    /// configured, stub mode otherwise
    pub fn from_deps(deps: &PlannerDeps) -> Self {
        match &deps.weather_api_key {
            Some(key) => Self::live(Arc::new(TomorrowClient::new(
                deps.http.clone(),
                key.clone(),
            ))),
            None => Self::stub(),
        }
    }

    /// Whether this resolver returns the canned reading
    pub fn is_stub(&self) -> bool {
        self.client.is_none()
    }

    /// Resolve current conditions. Live-mode failures propagate.
    pub async fn resolve(&self, lat: f64, lng: f64) -> Result<WeatherReading> {
        let Some(client) = &self.client else {
            return Ok(WeatherReading::stub());
        };

        if !LAT_RANGE.contains(&lat) || !LNG_RANGE.contains(&lng) {
            return Err(PlannerError::InvalidCoordinates { lat, lng });
        }

        let values = client.realtime(lat, lng).await?;

        Ok(WeatherReading {
            temperature: format!("{:.0}°C", values.temperature_apparent),
            description: weather_code::describe(values.weather_code).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MockGeoClient;
    use crate::weather::{MockWeatherClient, RealtimeValues};

    #[tokio::test]
    async fn test_location_outage_yields_exact_fallback() {
        let resolver = LocationResolver::new(Arc::new(MockGeoClient::failing()));

        let location = resolver.resolve().await;
        assert_eq!(location, Location::fallback());
    }

    #[tokio::test]
    async fn test_location_missing_fields_are_substituted() {
        let fix = GeoFix {
            city: None,
            region: Some("Kyiv Oblast".into()),
            country_name: Some("Ukraine".into()),
            latitude: None,
            longitude: Some(30.5234),
        };
        let resolver = LocationResolver::new(Arc::new(MockGeoClient::returning(fix)));

        let location = resolver.resolve().await;
        assert_eq!(location.city, "Unknown");
        assert_eq!(location.region, "Kyiv Oblast");
        assert_eq!(location.country, "Ukraine");
        assert!((location.lat - 0.0).abs() < f64::EPSILON);
        assert!((location.lng - 30.5234).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_location_out_of_range_coordinates_fall_back() {
        let fix = GeoFix {
            latitude: Some(120.0),
            longitude: Some(30.0),
            ..GeoFix::default()
        };
        let resolver = LocationResolver::new(Arc::new(MockGeoClient::returning(fix)));

        let location = resolver.resolve().await;
        assert_eq!(location, Location::fallback());
    }

    #[tokio::test]
    async fn test_stub_mode_returns_canned_reading() {
        let resolver = WeatherResolver::stub();
        assert!(resolver.is_stub());

        let reading = resolver.resolve(50.4501, 30.5234).await.unwrap();
        assert_eq!(reading, WeatherReading::stub());
        assert_eq!(reading.temperature, "21 °C");
        assert_eq!(reading.description, "Sunny");
    }

    #[tokio::test]
    async fn test_live_reading_is_rounded_and_translated() {
        let mock = Arc::new(MockWeatherClient::returning(RealtimeValues {
            temperature_apparent: 20.6,
            weather_code: 1000,
        }));
        let resolver = WeatherResolver::live(mock.clone());

        let reading = resolver.resolve(50.4501, 30.5234).await.unwrap();
        assert_eq!(reading.temperature, "21°C");
        assert_eq!(reading.description, "Clear, Sunny");
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.requested(), vec![(50.4501, 30.5234)]);
    }

    #[tokio::test]
    async fn test_live_unmapped_code_is_unknown() {
        let mock = Arc::new(MockWeatherClient::returning(RealtimeValues {
            temperature_apparent: 3.2,
            weather_code: 9999,
        }));
        let resolver = WeatherResolver::live(mock);

        let reading = resolver.resolve(0.0, 0.0).await.unwrap();
        assert_eq!(reading.temperature, "3°C");
        assert_eq!(reading.description, "Unknown");
    }

    #[tokio::test]
    async fn test_live_rejects_out_of_range_coordinates() {
        let mock = Arc::new(MockWeatherClient::returning(RealtimeValues {
            temperature_apparent: 10.0,
            weather_code: 1000,
        }));
        let resolver = WeatherResolver::live(mock.clone());

        let err = resolver.resolve(95.0, 30.0).await.unwrap_err();
        assert!(matches!(err, PlannerError::InvalidCoordinates { .. }));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_live_outage_propagates() {
        let resolver = WeatherResolver::live(Arc::new(MockWeatherClient::failing()));
        assert!(resolver.resolve(50.0, 30.0).await.is_err());
    }

    #[tokio::test]
    async fn test_from_deps_selects_mode_by_credential() {
        let http = reqwest::Client::new();

        let stub = WeatherResolver::from_deps(&PlannerDeps::new(http.clone(), None));
        assert!(stub.is_stub());

        let live = WeatherResolver::from_deps(&PlannerDeps::new(http, Some("key".into())));
        assert!(!live.is_stub());
    }
}
