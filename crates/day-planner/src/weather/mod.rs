//! Weather Integration
//!
//! Abstractions and implementations for realtime weather providers.

mod mock;
mod tomorrow;

pub use mock::MockWeatherClient;
pub use tomorrow::TomorrowClient;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Current-conditions values from the provider's realtime endpoint.
/// Both fields are required: a response missing either is malformed
/// and the deserialization error propagates.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeValues {
    /// Apparent ("feels like") temperature in the requested units
    pub temperature_apparent: f64,

    /// Numeric condition code, translated via `weather_code::describe`
    pub weather_code: i64,
}

/// Weather client trait (Strategy pattern)
///
/// Implement this for each provider: tomorrow.io, open-meteo, etc.
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions at the given coordinates
    async fn realtime(&self, lat: f64, lng: f64) -> Result<RealtimeValues>;

    /// Provider name
    fn name(&self) -> &str;
}
