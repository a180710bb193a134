//! Geolocation Integration
//!
//! Abstractions and implementations for IP-based geolocation providers.

mod ipapi;
mod mock;

pub use ipapi::IpApiClient;
pub use mock::MockGeoClient;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Raw geolocation fix as the provider returns it.
/// Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeoFix {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Geolocation client trait (Strategy pattern)
///
/// Implement this for each provider: ipapi.co, ip-api.com, MaxMind, etc.
#[async_trait]
pub trait GeoClient: Send + Sync {
    /// Resolve the caller's approximate position from its network origin
    async fn current_fix(&self) -> Result<GeoFix>;

    /// Provider name
    fn name(&self) -> &str;
}
