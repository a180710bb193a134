//! tomorrow.io Weather Client

use async_trait::async_trait;
use serde::Deserialize;

use super::{RealtimeValues, WeatherClient};
use crate::error::Result;

const REALTIME_URL: &str = "https://api.tomorrow.io/v4/weather/realtime";

/// Wire shape: `{"data": {"values": {...}}}`
#[derive(Debug, Deserialize)]
struct RealtimeResponse {
    data: RealtimeData,
}

#[derive(Debug, Deserialize)]
struct RealtimeData {
    values: RealtimeValues,
}

/// Live weather client backed by tomorrow.io's realtime endpoint
pub struct TomorrowClient {
    http: reqwest::Client,
    api_key: String,
}

impl TomorrowClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }
}

#[async_trait]
impl WeatherClient for TomorrowClient {
    async fn realtime(&self, lat: f64, lng: f64) -> Result<RealtimeValues> {
        let location = format!("{lat},{lng}");

        let response: RealtimeResponse = self
            .http
            .get(REALTIME_URL)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("location", location.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(
            temperature_apparent = response.data.values.temperature_apparent,
            weather_code = response.data.values.weather_code,
            "tomorrow.io responded"
        );

        Ok(response.data.values)
    }

    fn name(&self) -> &str {
        "tomorrow.io"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_body_parses() {
        let body = r#"{"data":{"values":{"temperatureApparent":20.6,"weatherCode":1000}}}"#;
        let parsed: RealtimeResponse = serde_json::from_str(body).unwrap();

        assert!((parsed.data.values.temperature_apparent - 20.6).abs() < f64::EPSILON);
        assert_eq!(parsed.data.values.weather_code, 1000);
    }

    #[test]
    fn test_missing_values_is_an_error() {
        let body = r#"{"data":{"values":{"weatherCode":1000}}}"#;
        assert!(serde_json::from_str::<RealtimeResponse>(body).is_err());
    }
}
