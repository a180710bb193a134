//! Run Dependencies
//!
//! The dependency bundle a single planning run is constructed with. Built once
//! per invocation, read-only afterwards. The HTTP client is cheaply cloneable
//! and safe to share across the run's tool calls.

use std::time::Duration;

use crate::error::Result;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Dependencies for one planning run
#[derive(Clone, Debug)]
pub struct PlannerDeps {
    /// Shared HTTP transport
    pub http: reqwest::Client,

    /// Weather provider credential; absent switches the weather
    /// resolver to stub mode
    pub weather_api_key: Option<String>,
}

impl PlannerDeps {
    pub fn new(http: reqwest::Client, weather_api_key: Option<String>) -> Self {
        Self {
            http,
            weather_api_key,
        }
    }

    /// Build the bundle from the environment.
    ///
    /// Reads `WEATHER_API_KEY` (absence selects stub mode) and
    /// `PLANNER_HTTP_TIMEOUT_SECS` for the transport timeout.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = std::env::var("PLANNER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let weather_api_key = std::env::var("WEATHER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Ok(Self::new(http, weather_api_key))
    }

    /// Whether weather resolution will run in stub mode
    pub fn stub_mode(&self) -> bool {
        self.weather_api_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_mode_follows_credential() {
        let http = reqwest::Client::new();

        let without_key = PlannerDeps::new(http.clone(), None);
        assert!(without_key.stub_mode());

        let with_key = PlannerDeps::new(http, Some("secret".into()));
        assert!(!with_key.stub_mode());
    }
}
